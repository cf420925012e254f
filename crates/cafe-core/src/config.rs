//! Run configuration for the live scheduler and the simulator.
//!
//! Typically loaded from a TOML file by the application crate (every field
//! has a default, so a partial file is fine) and passed to the scheduler or
//! simulation service.

use std::time::Duration;

use crate::{CafeError, CafeResult};

// ── LiveConfig ────────────────────────────────────────────────────────────────

/// Settings for the wall-clock scheduler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LiveConfig {
    /// Number of baristas.  Default: 3.
    pub worker_count: usize,

    /// Period of the scheduling tick in milliseconds.  Default: 1000.
    pub tick_period_ms: u64,

    /// Real seconds spent per minute of prep time.  Default: 5, i.e. an
    /// espresso (2 min) occupies a barista for 10 s of wall time.
    pub prep_secs_per_minute: u64,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            worker_count:         3,
            tick_period_ms:       1_000,
            prep_secs_per_minute: 5,
        }
    }
}

impl LiveConfig {
    #[inline]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Wall-clock time a barista spends on an order of `prep_minutes`.
    #[inline]
    pub fn prep_duration(&self, prep_minutes: u32) -> Duration {
        Duration::from_secs(prep_minutes as u64 * self.prep_secs_per_minute)
    }

    pub fn validate(&self) -> CafeResult<()> {
        validate_worker_count(self.worker_count)?;
        if self.tick_period_ms == 0 {
            return Err(CafeError::Config("tick_period_ms must be positive".into()));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Settings for the discrete-event simulator and its workload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of baristas.  Default: 3.
    pub worker_count: usize,

    /// Length of the simulated session in seconds; arrivals are clamped to
    /// it.  Default: 10 800 (07:00 → 10:00).
    pub session_window_secs: u64,

    /// Per-test seed is `test_number * seed_multiplier`.  Default: 12 345.
    pub seed_multiplier: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            worker_count:        3,
            session_window_secs: 10_800,
            seed_multiplier:     12_345,
        }
    }
}

impl SimConfig {
    #[inline]
    pub fn seed_for(&self, test_number: u32) -> u64 {
        test_number as u64 * self.seed_multiplier
    }

    pub fn validate(&self) -> CafeResult<()> {
        validate_worker_count(self.worker_count)?;
        if self.session_window_secs == 0 {
            return Err(CafeError::Config("session_window_secs must be positive".into()));
        }
        Ok(())
    }
}

// ── CafeConfig ────────────────────────────────────────────────────────────────

/// Top-level configuration file layout (`[live]` and `[sim]` tables).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CafeConfig {
    pub live: LiveConfig,
    pub sim:  SimConfig,
}

impl CafeConfig {
    pub fn validate(&self) -> CafeResult<()> {
        self.live.validate()?;
        self.sim.validate()
    }
}

fn validate_worker_count(count: usize) -> CafeResult<()> {
    if count == 0 {
        return Err(CafeError::Config("worker_count must be at least 1".into()));
    }
    if count > u16::MAX as usize {
        return Err(CafeError::Config(format!("worker_count {count} exceeds {}", u16::MAX)));
    }
    Ok(())
}
