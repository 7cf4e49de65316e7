pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::PlaybackApiClient;
pub use error::ApiError;
pub use source::PlaybackSource;
pub use types::{PlaybackResponse, WireSearch, WireStats};
