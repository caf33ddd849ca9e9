//! Date window resolution for printout history searches.

use chrono::{Days, NaiveDate};
use std::fmt;

/// Default widest span a search may cover, in days.
pub const DEFAULT_MAX_SPAN_DAYS: u32 = 7;

/// Error returned when a requested window is wider than allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRangeError {
    pub span_days: i64,
    pub max_days: u32,
}

impl fmt::Display for SearchRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "search range spans {} days, limit is {} days",
            self.span_days, self.max_days
        )
    }
}

impl std::error::Error for SearchRangeError {}

/// A resolved search window.
///
/// `end` is `None` for a single-day search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    start: NaiveDate,
    end: Option<NaiveDate>,
}

impl SearchWindow {
    /// Resolves two optional dates into a window.
    ///
    /// - neither date, or both equal: a single day (`today` when neither)
    /// - both dates: ordered so `start <= end`, rejected when the span
    ///   exceeds `max_days`
    /// - one date: a single day
    pub fn resolve(
        a: Option<NaiveDate>,
        b: Option<NaiveDate>,
        today: NaiveDate,
        max_days: u32,
    ) -> Result<Self, SearchRangeError> {
        match (a, b) {
            (None, None) => Ok(Self::single(today)),
            (Some(a), Some(b)) if a == b => Ok(Self::single(a)),
            (Some(a), Some(b)) => {
                let (start, end) = if a < b { (a, b) } else { (b, a) };
                let span_days = (end - start).num_days();
                if span_days > i64::from(max_days) {
                    return Err(SearchRangeError {
                        span_days,
                        max_days,
                    });
                }
                Ok(Self {
                    start,
                    end: Some(end),
                })
            }
            (Some(d), None) | (None, Some(d)) => Ok(Self::single(d)),
        }
    }

    /// A window covering exactly one day.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: None,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns true for a single-day window.
    pub fn is_single_day(&self) -> bool {
        self.end.is_none()
    }

    /// The exclusive upper bound: the day after the last day covered.
    pub fn end_exclusive(&self) -> NaiveDate {
        let last = self.end.unwrap_or(self.start);
        last.checked_add_days(Days::new(1)).unwrap_or(last)
    }
}
