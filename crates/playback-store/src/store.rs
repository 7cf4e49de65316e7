//! Fetch lifecycle for the playback dataset.
//!
//! State lives in a `tokio::sync::watch` channel. Every mutation goes
//! through `send_modify`, so receivers observe each transition
//! (`loading` raised, data swapped, `loading` cleared) and no lock is ever
//! held across the request await.
//!
//! Overlapping fetches are not sequenced: whichever settles last decides the
//! final data, and the first to settle already clears `loading`.

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::watch;

use playback_api::PlaybackSource;
use playback_core::{
    AppConfig, Clock, PlaybackFilters, PlaybackWindow, Search, Stats, SystemClock,
};

use crate::state::PlaybackState;

/// Message exposed to views when a fetch fails. Transport details are logged,
/// not surfaced.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load playback data";

const DEFAULT_RESULT_LIMIT: i64 = 100;
const DEFAULT_WINDOW_DAYS: u32 = 30;

/// Session-wide owner of the playback dataset and its view flags.
///
/// Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct PlaybackDataStore {
    source: Arc<dyn PlaybackSource>,
    clock: Arc<dyn Clock>,
    state: Arc<watch::Sender<PlaybackState>>,
    result_limit: i64,
    default_window_days: u32,
}

impl PlaybackDataStore {
    /// Creates an empty store reading "today" from the system clock.
    #[must_use]
    pub fn new(source: Arc<dyn PlaybackSource>) -> Self {
        let (state, _) = watch::channel(PlaybackState::default());
        Self {
            source,
            clock: Arc::new(SystemClock),
            state: Arc::new(state),
            result_limit: DEFAULT_RESULT_LIMIT,
            default_window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Creates an empty store using the classification cap and default
    /// window length from `config`.
    #[must_use]
    pub fn from_config(source: Arc<dyn PlaybackSource>, config: &AppConfig) -> Self {
        Self::new(source)
            .with_result_limit(config.result_limit)
            .with_default_window_days(config.default_window_days)
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_result_limit(mut self, result_limit: i64) -> Self {
        self.result_limit = result_limit;
        self
    }

    #[must_use]
    pub fn with_default_window_days(mut self, days: u32) -> Self {
        self.default_window_days = days;
        self
    }

    /// Loads the inclusive window `start_date..=end_date`.
    ///
    /// Never fails from the caller's point of view. On success the loaded
    /// searches and stats are replaced wholesale; on failure they are kept
    /// and `error` is set to [`LOAD_ERROR_MESSAGE`]. An inverted range is
    /// forwarded without complaint.
    pub async fn fetch_playback_data(&self, start_date: NaiveDate, end_date: NaiveDate) {
        let window = PlaybackWindow::new(start_date, end_date);

        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
        let mut guard = LoadingGuard::new(&self.state);

        let result = self.source.fetch_playback_data(&window).await;

        guard.disarm();
        match result {
            Ok(data) => {
                tracing::info!(
                    %window,
                    searches = data.searches.len(),
                    total = data.stats.total,
                    no_results_rate = data.stats.no_results_rate,
                    "playback data loaded"
                );
                if !data.stats.is_consistent() {
                    tracing::debug!(%window, stats = ?data.stats, "stats buckets do not sum to total");
                }
                self.state.send_modify(|s| {
                    s.searches = data.searches;
                    s.stats = data.stats;
                    s.window = Some(window);
                    s.loading = false;
                });
            }
            Err(error) => {
                tracing::warn!(%window, %error, "failed to load playback data");
                self.state.send_modify(|s| {
                    s.error = Some(LOAD_ERROR_MESSAGE.to_string());
                    s.loading = false;
                });
            }
        }
    }

    /// Loads the default trailing window ending today.
    pub async fn initialize(&self) {
        let window = self.default_window();
        tracing::debug!(%window, "initializing playback store");
        self.fetch_playback_data(window.start, window.end).await;
    }

    /// The window [`PlaybackDataStore::initialize`] would request right now.
    #[must_use]
    pub fn default_window(&self) -> PlaybackWindow {
        PlaybackWindow::trailing(self.clock.today(), self.default_window_days)
    }

    pub fn set_filters(&self, filters: PlaybackFilters) {
        self.state.send_modify(|s| s.filters = filters);
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> PlaybackState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.state.borrow().has_data()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        self.state.borrow().stats.clone()
    }

    #[must_use]
    pub fn result_limit(&self) -> i64 {
        self.result_limit
    }

    /// Searches passing the current filters, cloned out of the state.
    #[must_use]
    pub fn visible_searches(&self) -> Vec<Search> {
        self.state
            .borrow()
            .visible_searches(self.result_limit)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Clears `loading` if a fetch future is dropped before it settles.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<PlaybackState>,
    armed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn new(state: &'a watch::Sender<PlaybackState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(|s| s.loading = false);
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
