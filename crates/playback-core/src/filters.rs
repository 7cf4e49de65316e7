use serde::{Deserialize, Serialize};

use crate::search::{Search, SearchOutcome};

/// Which outcome categories the dashboard currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackFilters {
    pub show_success: bool,
    pub show_limited: bool,
    pub show_no_results: bool,
}

impl Default for PlaybackFilters {
    fn default() -> Self {
        Self {
            show_success: true,
            show_limited: true,
            show_no_results: true,
        }
    }
}

impl PlaybackFilters {
    #[must_use]
    pub fn allows(&self, outcome: SearchOutcome) -> bool {
        match outcome {
            SearchOutcome::Successful => self.show_success,
            SearchOutcome::Limited => self.show_limited,
            SearchOutcome::NoResults => self.show_no_results,
        }
    }

    /// Returns the searches whose outcome passes these filters, in input order.
    #[must_use]
    pub fn apply<'a>(&self, searches: &'a [Search], result_limit: i64) -> Vec<&'a Search> {
        searches
            .iter()
            .filter(|s| self.allows(s.outcome(result_limit)))
            .collect()
    }
}
