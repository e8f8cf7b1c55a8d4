//! Domain models for the Anvaya API.
//!
//! These are transport-level data shapes. The backend owns their lifecycle
//! and validation; the client only reads and writes them.
//!
//! ## Submodules
//!
//! - [`wing`] - Wings, optionally with embedded activities and photos
//! - [`activity`] - Activities
//! - [`photo`] - Photos
//! - [`statistics`] - Per-wing activity counts
//! - [`auth`] - Login exchange and health endpoints

mod activity;
mod auth;
mod photo;
mod statistics;
mod wing;

// Re-export everything at the models level
pub use activity::Activity;
pub use auth::{ApiInfo, HealthStatus, LoginRequest, TokenResponse};
pub use photo::Photo;
pub use statistics::{ActivityStatistics, WingStatistic};
pub use wing::{Wing, WingWithRelations};
#[cfg(test)]
mod serde_tests;
