//! Wire types for `GET /api/playback-data`.
//!
//! The backend speaks snake_case JSON and encodes timestamps as integer
//! epoch milliseconds. These structs mirror that payload exactly; the
//! `From` impls below are the only place the wire shape is translated into
//! the client-facing model in `playback_core`.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use playback_core::{PlaybackData, Search, Stats};

/// Response envelope: `{ "searches": [...], "stats": {...} }`.
#[derive(Debug, Deserialize)]
pub struct PlaybackResponse {
    pub searches: Vec<WireSearch>,
    pub stats: WireStats,
}

#[derive(Debug, Deserialize)]
pub struct WireSearch {
    pub qid: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_miles: f64,
    pub num_found: i64,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub administrative_area: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub ip_address: String,
    #[serde(default)]
    pub uid: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct WireStats {
    pub total: u64,
    pub successful: u64,
    pub limited: u64,
    pub no_results: u64,
    pub no_results_rate: f64,
}

impl From<WireSearch> for Search {
    fn from(wire: WireSearch) -> Self {
        Search {
            qid: wire.qid,
            timestamp: wire.timestamp,
            latitude: wire.latitude,
            longitude: wire.longitude,
            radius_miles: wire.radius_miles,
            num_found: wire.num_found,
            locality: wire.locality,
            administrative_area: wire.administrative_area,
            country: wire.country,
            ip_address: wire.ip_address,
            uid: wire.uid,
        }
    }
}

impl From<WireStats> for Stats {
    fn from(wire: WireStats) -> Self {
        Stats {
            total: wire.total,
            successful: wire.successful,
            limited: wire.limited,
            no_results: wire.no_results,
            no_results_rate: wire.no_results_rate,
        }
    }
}

impl From<PlaybackResponse> for PlaybackData {
    fn from(response: PlaybackResponse) -> Self {
        PlaybackData {
            searches: response.searches.into_iter().map(Search::from).collect(),
            stats: response.stats.into(),
        }
    }
}
