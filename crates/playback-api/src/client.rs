//! HTTP client for the playback backend.
//!
//! Wraps `reqwest` with a fixed endpoint, request timeout, and typed
//! response decoding. Every non-2xx status surfaces as
//! [`ApiError::UnexpectedStatus`]; retries are left to the caller.

use std::time::Duration;

use reqwest::{Client, Url};

use playback_core::{AppConfig, PlaybackData, PlaybackWindow};

use crate::error::ApiError;
use crate::types::PlaybackResponse;

const PLAYBACK_DATA_PATH: &str = "api/playback-data";

/// Client for `GET /api/playback-data`.
///
/// Use [`PlaybackApiClient::from_config`] in the binary or
/// [`PlaybackApiClient::new`] to point at a mock server in tests.
pub struct PlaybackApiClient {
    client: Client,
    endpoint: Url,
}

impl PlaybackApiClient {
    /// Creates a client whose endpoint is `{base_url}/api/playback-data`.
    ///
    /// A path prefix on `base_url` is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ApiError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends to the prefix path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason,
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_string()));
        }
        let endpoint = base
            .join(PLAYBACK_DATA_PATH)
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// # Errors
    ///
    /// Same as [`PlaybackApiClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Fetches the searches and stats for `window`.
    ///
    /// The window is sent unmodified, inverted or not.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or timeout.
    /// - [`ApiError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ApiError::Deserialize`] if the body does not match the payload shape.
    pub async fn get_playback_data(
        &self,
        window: &PlaybackWindow,
    ) -> Result<PlaybackData, ApiError> {
        let url = self.build_url(window);
        tracing::debug!(%url, "requesting playback data");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let payload: PlaybackResponse =
            serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
                context: format!("playback-data({window})"),
                source: e,
            })?;

        Ok(payload.into())
    }

    /// Appends `start_date`/`end_date` to the endpoint.
    fn build_url(&self, window: &PlaybackWindow) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("start_date", &window.start_param())
            .append_pair("end_date", &window.end_param());
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
