// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Anvaya Store
//!
//! Local state for the Anvaya command-line client.
//!
//! This crate provides:
//!
//! - **SettingsStore**: Connection preferences with persistence
//! - **FileTokenStore**: The admin token kept in a JSON file between runs
//! - **Persistence**: File I/O helpers for JSON data
//!
//! ## Usage
//!
//! ```ignore
//! use anvaya_client::{AnvayaClient, ClientContext};
//! use anvaya_store::{open_token_store, SettingsStore};
//!
//! let settings = SettingsStore::load_default().await?.get().await;
//! let ctx = ClientContext::builder()
//!     .settings(settings.client_settings(None))
//!     .token_store(open_token_store(settings.token_storage))
//!     .build();
//! let client = AnvayaClient::new(ctx)?;
//! ```

pub mod error;
pub mod persistence;
pub mod settings_store;
pub mod token_file;

pub use error::StoreError;
pub use persistence::{
    default_config_dir, default_session_path, default_settings_path, load_json, load_json_or_default,
    save_json,
};
pub use settings_store::{validate_base_url, Settings, SettingsStore, TokenStorage};
pub use token_file::{open_token_store, FileTokenStore};
