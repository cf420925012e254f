//! Named test profiles.
//!
//! Every test number maps to a profile.  Four numbers carry a named override
//! of exactly one distribution parameter; the rest use the defaults.
//!
//! | Test | Name            | Override                               |
//! |------|-----------------|----------------------------------------|
//! | 2    | Espresso Rush   | espresso chance 0.80 (and 300 orders)  |
//! | 3    | Complex / Slow  | espresso chance 0.05                   |
//! | 4    | Loyalty Flood   | loyalty chance 0.60                    |
//! | 5    | High Load       | mean inter-arrival gap halved          |

/// Mean arrival rate of the reference workload: 1.4 customers per minute.
pub const ARRIVALS_PER_MINUTE: f64 = 1.4;

/// Default chance that an order is an espresso (matches its catalog weight).
pub const DEFAULT_ESPRESSO_CHANCE: f64 = 0.20;

pub const DEFAULT_LOYALTY_CHANCE: f64 = 0.15;

/// Chance that a gap is stretched by a lull.
pub const LULL_CHANCE: f64 = 0.08;

/// A lull adds `LULL_MIN_SECS + U[0, LULL_SPREAD_SECS)` seconds.
pub const LULL_MIN_SECS: u64 = 120;
pub const LULL_SPREAD_SECS: u64 = 180;

/// Distribution parameters for one test's workload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TestProfile {
    pub name:                   &'static str,
    pub espresso_chance:        f64,
    pub loyalty_chance:         f64,
    pub mean_interarrival_secs: f64,
}

impl Default for TestProfile {
    fn default() -> Self {
        Self {
            name:                   "Standard",
            espresso_chance:        DEFAULT_ESPRESSO_CHANCE,
            loyalty_chance:         DEFAULT_LOYALTY_CHANCE,
            mean_interarrival_secs: 60.0 / ARRIVALS_PER_MINUTE,
        }
    }
}

impl TestProfile {
    /// The profile for `test_number`.
    pub fn for_test(test_number: u32) -> Self {
        let base = Self::default();
        match test_number {
            2 => Self { name: "Espresso Rush",  espresso_chance: 0.80, ..base },
            3 => Self { name: "Complex / Slow", espresso_chance: 0.05, ..base },
            4 => Self { name: "Loyalty Flood",  loyalty_chance:  0.60, ..base },
            5 => Self {
                name:                   "High Load",
                mean_interarrival_secs: base.mean_interarrival_secs * 0.5,
                ..base
            },
            _ => base,
        }
    }

    /// Number of orders in the reference run of `test_number`:
    /// `200 + 10 * n`, except test 2 which is pinned at 300.
    pub fn order_count(test_number: u32) -> usize {
        if test_number == 2 {
            300
        } else {
            200 + 10 * test_number as usize
        }
    }
}
