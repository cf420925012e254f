//! Time model shared by the live and simulated paths.
//!
//! # Design
//!
//! Every timestamp is an integer count of milliseconds on some epoch:
//!
//! - the live scheduler uses the Unix epoch ([`Timestamp::now`]);
//! - the simulator uses "milliseconds since the session opened", so tick 0
//!   is 07:00 on the simulated day and arrivals are small positive numbers.
//!
//! Both paths only ever subtract timestamps from the same epoch, so the two
//! never need to be reconciled.  Waits are measured in whole seconds and
//! truncate, which is what the scoring thresholds (480 s, 540 s, 600 s) are
//! written against.

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// An absolute point in time, in milliseconds since an epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// Wall-clock time, milliseconds since the Unix epoch.
    pub fn now() -> Self {
        let ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Timestamp(ms)
    }

    #[inline]
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs * 1_000)
    }

    #[inline]
    pub fn from_millis(ms: i64) -> Self {
        Timestamp(ms)
    }

    /// Whole seconds since the epoch (truncating towards negative infinity).
    #[inline]
    pub fn as_secs(self) -> i64 {
        self.0.div_euclid(1_000)
    }

    /// Whole seconds elapsed from `earlier` to `self`.
    ///
    /// Saturates at zero when `earlier` lies in the future, so a clock read
    /// racing a submission never produces a negative wait.
    #[inline]
    pub fn secs_since(self, earlier: Timestamp) -> u64 {
        ((self.0 - earlier.0).max(0) / 1_000) as u64
    }

    /// The timestamp `secs` seconds after `self`.
    #[inline]
    pub fn plus_secs(self, secs: u64) -> Timestamp {
        Timestamp(self.0 + secs as i64 * 1_000)
    }
}

impl std::ops::Add<Duration> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: Duration) -> Timestamp {
        Timestamp(self.0 + rhs.as_millis() as i64)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = Duration;
    /// Elapsed time from `rhs` to `self`; zero if `rhs` is later.
    #[inline]
    fn sub(self, rhs: Timestamp) -> Duration {
        Duration::from_millis((self.0 - rhs.0).max(0) as u64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}s", self.0.div_euclid(1_000), self.0.rem_euclid(1_000))
    }
}

/// Convert whole seconds to minutes for reporting.
#[inline]
pub fn secs_to_minutes(secs: u64) -> f64 {
    secs as f64 / 60.0
}
