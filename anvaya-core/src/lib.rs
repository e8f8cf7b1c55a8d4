// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Anvaya Core
//!
//! Core data shapes for the Anvaya Club client.
//!
//! This crate provides the types shared by the HTTP client, the settings
//! store and the command-line tool:
//!
//! - Transport-level models (wings, activities, photos, statistics)
//! - Authentication request/response shapes
//! - Local validation errors raised before any request is sent
//!
//! ## Key Types
//!
//! ### Wings
//! - [`Wing`] - An organizational unit identified by slug and id
//! - [`WingWithRelations`] - A wing with its activities and photos embedded
//!
//! ### Activities & Photos
//! - [`Activity`] - A dated event record belonging to one wing
//! - [`Photo`] - An image record belonging to one wing
//!
//! ### Statistics
//! - [`ActivityStatistics`] - Per-wing activity counts plus available years
//! - [`WingStatistic`] - One row of the statistics table
//!
//! ### Auth & Health
//! - [`LoginRequest`] / [`TokenResponse`] - Admin login exchange
//! - [`HealthStatus`] / [`ApiInfo`] - Backend liveness endpoints

pub mod error;
pub mod models;

// Re-export error types
pub use error::ValidationError;

// Re-export all model types
pub use models::{
    // Wing types
    Wing,
    WingWithRelations,
    // Activity & photo types
    Activity,
    Photo,
    // Statistics
    ActivityStatistics,
    WingStatistic,
    // Auth & health
    ApiInfo,
    HealthStatus,
    LoginRequest,
    TokenResponse,
};
