use async_trait::async_trait;

use playback_core::{PlaybackData, PlaybackWindow};

use crate::client::PlaybackApiClient;
use crate::error::ApiError;

/// Anything that can produce the payload for a playback window.
///
/// The store depends on this rather than on the HTTP client directly.
#[async_trait]
pub trait PlaybackSource: Send + Sync {
    async fn fetch_playback_data(&self, window: &PlaybackWindow)
        -> Result<PlaybackData, ApiError>;
}

#[async_trait]
impl PlaybackSource for PlaybackApiClient {
    async fn fetch_playback_data(
        &self,
        window: &PlaybackWindow,
    ) -> Result<PlaybackData, ApiError> {
        self.get_playback_data(window).await
    }
}
