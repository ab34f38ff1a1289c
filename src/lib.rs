//! talentlens: typed client and terminal front end for a people-search
//! backend (search, profiles, skill analytics).
//!
//! All business logic lives in the backend; this crate renders state and
//! issues HTTP requests. The controllers own their view state exclusively
//! and every fetch result flows through them.

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod pagination;
pub mod proficiency;
pub mod profile;
pub mod render;
pub mod search;
pub mod session;
pub mod types;

pub use api::{ApiClient, ApiError};
pub use config::AppConfig;

/// Lifecycle of a fetching view: re-entrant on every new submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Failed,
}
