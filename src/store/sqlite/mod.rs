//! SQLite-backed record store implementation.

mod connection;
mod customers;
mod invoice_types;
mod notes;
mod printouts;
mod ranking;
mod rows;
mod transaction;


use chrono::{FixedOffset, Offset, Utc};
use rusqlite::Connection;
use std::time::Duration;

use crate::domain::DEFAULT_MAX_SPAN_DAYS;

// Re-export the Transaction type
pub use transaction::Transaction;

/// Default UTC offset for local dates, in hours.
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

/// Default time a transaction waits for the write lock.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

// ===========================================
// StoreSettings
// ===========================================

/// Tunables applied when a store is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSettings {
    /// Offset used for "today" and for stored printout timestamps.
    pub utc_offset: FixedOffset,
    /// Widest printout search span, in days.
    pub max_search_days: u32,
    /// How long a writer waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl StoreSettings {
    /// Builds an offset from whole hours. `None` outside -23..=23.
    pub fn offset_from_hours(hours: i32) -> Option<FixedOffset> {
        hours.checked_mul(3600).and_then(FixedOffset::east_opt)
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            utc_offset: Self::offset_from_hours(DEFAULT_UTC_OFFSET_HOURS)
                .unwrap_or_else(|| Utc.fix()),
            max_search_days: DEFAULT_MAX_SPAN_DAYS,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed record store.
///
/// Owns one connection. Open one store per thread; SQLite's write lock
/// serializes rank mutations across connections.
pub struct SqliteStore {
    pub(crate) conn: Connection,
    pub(crate) settings: StoreSettings,
}
