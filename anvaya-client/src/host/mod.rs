//! Host APIs for the Anvaya client.
//!
//! This module provides the pieces the client talks to besides the backend:
//!
//! - [`http`] - Transport client with auth injection and error normalization
//! - [`session`] - Token storage abstraction and the session handle
//! - [`keychain`] - Token storage in the system keychain
//! - [`navigation`] - Navigation collaborator notified on lost sessions

pub mod http;
pub mod keychain;
pub mod navigation;
pub mod session;

// Re-export key types
pub use http::HttpClient;
pub use keychain::KeychainTokenStore;
pub use navigation::{Navigator, NoopNavigator};
pub use session::{MemoryTokenStore, Session, TokenStore, TOKEN_STORAGE_KEY};
