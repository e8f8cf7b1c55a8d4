// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Anvaya Client
//!
//! HTTP access layer for the Anvaya backend.
//!
//! ## Transport
//!
//! The [`host`] module holds everything a request touches besides the
//! payload:
//!
//! - [`host::http`] - Shared client: base URL, timeout, bearer injection, 401 handling
//! - [`host::session`] - Token storage trait and the session handle
//! - [`host::keychain`] - Token storage in the system keychain
//! - [`host::navigation`] - Collaborator notified when a 401 should send the user to login
//!
//! ## API Surface
//!
//! - [`AnvayaClient`] - Entry point; read operations in [`public`], writes in [`admin`]
//! - [`upload`] - Multipart payloads for photo uploads and activity edits
//!
//! ## Errors
//!
//! Every failed request surfaces as an [`ApiError`] built by
//! [`normalize::normalize_error`]. Admin operations can also fail locally
//! before sending; they return [`ClientError`], which keeps the two apart.
//!
//! ## Example
//!
//! ```ignore
//! use anvaya_client::{AnvayaClient, ClientContext};
//!
//! let client = AnvayaClient::new(ClientContext::builder().base_url("http://localhost:8000").build())?;
//! for wing in client.get_wings().await? {
//!     println!("{} ({})", wing.name, wing.slug);
//! }
//! ```

pub mod admin;
pub mod client;
pub mod context;
pub mod error;
pub mod host;
pub mod normalize;
pub mod public;
pub mod upload;

// Client
pub use client::AnvayaClient;
pub use context::{ClientContext, ClientContextBuilder, ClientSettings};
pub use public::PhotoQuery;
pub use upload::{ActivityUpdate, NewActivity, UploadFile};

// Errors
pub use error::{ApiError, ApiErrorKind, ClientError, StorageError};
pub use normalize::{error_message, normalize_error, RawFailure};

// Host APIs
pub use host::{
    HttpClient, KeychainTokenStore, MemoryTokenStore, Navigator, NoopNavigator, Session, TokenStore,
    TOKEN_STORAGE_KEY,
};
