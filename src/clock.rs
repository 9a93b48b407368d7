//! Wall-clock time for the overlay.
//!
//! The board has no RTC, so "now" is [`BOOT_EPOCH`](crate::config::BOOT_EPOCH)
//! plus the time since boot.

use core::fmt;

use chrono::{
    DateTime,
    Utc,
};

/// Universal sortable layout, e.g. `2026-10-17 09:30:00Z`.
const FORMAT: &str = "%Y-%m-%d %H:%M:%SZ";

/// A UTC instant with second resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UtcTimestamp(DateTime<Utc>);

impl UtcTimestamp {
    /// Seconds since 1970-01-01T00:00:00Z. Values past chrono's range fall
    /// back to the epoch.
    #[must_use]
    pub fn from_unix(secs: u64) -> Self {
        let utc = i64::try_from(secs)
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .unwrap_or_default();
        Self(utc)
    }

    /// Current time on the board.
    #[cfg(feature = "board")]
    #[must_use]
    pub fn now() -> Self {
        Self::from_unix(crate::config::BOOT_EPOCH + embassy_time::Instant::now().as_secs())
    }
}

impl fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}
