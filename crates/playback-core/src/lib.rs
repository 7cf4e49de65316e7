//! Domain model and configuration for the search playback dashboard.
//!
//! Everything here is transport-agnostic: the HTTP wire format lives in
//! `playback-api`, and the stateful fetch lifecycle lives in `playback-store`.

pub mod app_config;
pub mod config;
pub mod filters;
pub mod search;
pub mod window;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use filters::PlaybackFilters;
pub use search::{PlaybackData, Search, SearchOutcome, Stats};
pub use window::{Clock, FixedClock, PlaybackWindow, SystemClock, DATE_FORMAT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
