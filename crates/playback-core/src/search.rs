//! Search records and window aggregates.
//!
//! These are the client-facing shapes. They serialize with camelCase keys
//! for presentation consumers; the backend's snake_case payload is mapped
//! into them by `playback-api`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One historical query event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Search {
    /// Query identifier. Not unique across pages.
    pub qid: i64,
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_miles: f64,
    pub num_found: i64,
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
    pub country: Option<String>,
    pub ip_address: String,
    pub uid: Option<i64>,
}

impl Search {
    /// Classifies this record against the server-side result cap.
    #[must_use]
    pub fn outcome(&self, result_limit: i64) -> SearchOutcome {
        SearchOutcome::classify(self.num_found, result_limit)
    }
}

/// How a single query resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOutcome {
    Successful,
    Limited,
    NoResults,
}

impl SearchOutcome {
    /// `NoResults` for zero (or a nonsensical negative count), `Limited` once
    /// `num_found` reaches `result_limit`, otherwise `Successful`.
    #[must_use]
    pub fn classify(num_found: i64, result_limit: i64) -> Self {
        if num_found <= 0 {
            SearchOutcome::NoResults
        } else if num_found >= result_limit {
            SearchOutcome::Limited
        } else {
            SearchOutcome::Successful
        }
    }
}

impl std::fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchOutcome::Successful => write!(f, "successful"),
            SearchOutcome::Limited => write!(f, "limited"),
            SearchOutcome::NoResults => write!(f, "no_results"),
        }
    }
}

/// Server-computed aggregates over the loaded window.
///
/// These are trusted as delivered and never recomputed from the record list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: u64,
    pub successful: u64,
    pub limited: u64,
    pub no_results: u64,
    /// Percentage in `[0, 100]`.
    pub no_results_rate: f64,
}

impl Stats {
    /// Whether the three buckets add up to `total`.
    ///
    /// Informational only: a mismatch is never treated as an error.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.successful
            .checked_add(self.limited)
            .and_then(|sum| sum.checked_add(self.no_results))
            == Some(self.total)
    }
}

/// Payload for one playback window, swapped into the store as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackData {
    pub searches: Vec<Search>,
    pub stats: Stats,
}
