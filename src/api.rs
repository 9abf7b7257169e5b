//! Stats backend API module
//!
//! Provides the HTTP client for the game-statistics backend.

pub mod stats_api;

pub use stats_api::{ApiError, HealthStatus, StatsApi};
