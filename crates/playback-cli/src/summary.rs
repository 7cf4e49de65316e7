//! Plain-text rendering of a store snapshot.

use std::fmt::Write;

use playback_core::SearchOutcome;
use playback_store::PlaybackState;

pub(crate) fn render(state: &PlaybackState, result_limit: i64, list: bool) -> String {
    let mut out = String::new();

    match state.window {
        Some(window) => {
            let _ = writeln!(out, "window: {window}");
        }
        None => {
            let _ = writeln!(out, "window: (none loaded)");
        }
    }

    let stats = &state.stats;
    let _ = writeln!(
        out,
        "total: {}  successful: {}  limited: {}  no results: {} ({:.1}%)",
        stats.total, stats.successful, stats.limited, stats.no_results, stats.no_results_rate
    );

    let visible = state.visible_searches(result_limit);
    let _ = writeln!(
        out,
        "visible: {} of {} loaded",
        visible.len(),
        state.searches.len()
    );

    if list {
        for search in visible {
            let place = [
                search.locality.as_deref(),
                search.administrative_area.as_deref(),
                search.country.as_deref(),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
            let outcome: SearchOutcome = search.outcome(result_limit);
            let _ = writeln!(
                out,
                "{}  qid={}  found={}  {}  ({:.4}, {:.4})  {}",
                search.timestamp.format("%Y-%m-%d %H:%M:%S"),
                search.qid,
                search.num_found,
                outcome,
                search.latitude,
                search.longitude,
                if place.is_empty() { "-" } else { place.as_str() },
            );
        }
    }

    if let Some(error) = &state.error {
        let _ = writeln!(out, "error: {error}");
    }

    out
}
