use playback_core::{PlaybackFilters, PlaybackWindow, Search, Stats};

/// Everything a view needs to render the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    /// Server order, never re-sorted locally.
    pub searches: Vec<Search>,
    pub stats: Stats,
    pub loading: bool,
    /// Set by the most recent failed fetch, cleared when the next one starts.
    pub error: Option<String>,
    /// Window the loaded `searches`/`stats` belong to.
    pub window: Option<PlaybackWindow>,
    pub filters: PlaybackFilters,
}

impl PlaybackState {
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.searches.is_empty()
    }

    /// Searches that pass the current filters, in server order.
    #[must_use]
    pub fn visible_searches(&self, result_limit: i64) -> Vec<&Search> {
        self.filters.apply(&self.searches, result_limit)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn search(qid: i64, num_found: i64) -> Search {
        Search {
            qid,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            latitude: 1.0,
            longitude: 2.0,
            radius_miles: 3.0,
            num_found,
            locality: None,
            administrative_area: None,
            country: None,
            ip_address: "127.0.0.1".to_string(),
            uid: None,
        }
    }

    #[test]
    fn default_state_is_idle_and_empty() {
        let state = PlaybackState::default();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.window.is_none());
        assert_eq!(state.stats, Stats::default());
        assert!(!state.has_data());
    }

    #[test]
    fn has_data_tracks_search_count() {
        for len in [1_i64, 2, 17] {
            let state = PlaybackState {
                searches: (0..len).map(|i| search(i, 1)).collect(),
                ..PlaybackState::default()
            };
            assert!(state.has_data(), "len {len} should have data");
        }
    }

    #[test]
    fn visible_searches_respects_filters() {
        let state = PlaybackState {
            searches: vec![search(1, 0), search(2, 4), search(3, 100)],
            filters: PlaybackFilters {
                show_success: true,
                show_limited: false,
                show_no_results: false,
            },
            ..PlaybackState::default()
        };
        let visible = state.visible_searches(100);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].qid, 2);
    }
}
