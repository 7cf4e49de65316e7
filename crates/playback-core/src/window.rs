//! Playback windows and the clock that anchors the default one.
//!
//! All arithmetic is on calendar dates (`NaiveDate`). Subtracting days from
//! an instant would shift the window by one whenever a DST transition falls
//! inside it.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Wire and display format for window bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range of calendar dates.
///
/// No ordering is enforced: an inverted window is sent to the backend as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaybackWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PlaybackWindow {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days`-long window ending on `today`.
    ///
    /// Saturates at `NaiveDate::MIN` rather than failing.
    #[must_use]
    pub fn trailing(today: NaiveDate, days: u32) -> Self {
        let start = today
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Parses two `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns the `chrono` parse error for whichever bound is malformed.
    pub fn parse(start: &str, end: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self {
            start: NaiveDate::parse_from_str(start, DATE_FORMAT)?,
            end: NaiveDate::parse_from_str(end, DATE_FORMAT)?,
        })
    }

    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// `end - start` in days. Negative for an inverted window.
    #[must_use]
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl std::fmt::Display for PlaybackWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start_param(), self.end_param())
    }
}

/// Source of "today" for the default window.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
