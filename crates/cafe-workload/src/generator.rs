//! `WorkloadGenerator` — seeded synthetic order streams.
//!
//! # Per-order draws (fixed order)
//!
//! ```text
//! drink   r ~ U[0,100)  → categorical 25/20/15/20/12/8 (espresso re-weighted)
//! loyal   u ~ U[0,1)    → u < loyalty_chance
//! gap     floor(Exp(mean_interarrival_secs))
//! lull    with p = 0.08: gap += 120 + U{0..180}
//! arrival = min(arrival_prev + gap, session_window)
//! ```
//!
//! The draw order is part of the reproducibility contract: changing it
//! changes every stream.

use cafe_core::{CafeResult, DrinkKind, Order, OrderId, SimConfig, Timestamp, WorkloadRng};

use crate::profile::{LULL_CHANCE, LULL_MIN_SECS, LULL_SPREAD_SECS, TestProfile};

/// Catalog weights (percent), indexed like [`DrinkKind::ALL`].
pub const BASE_DRINK_WEIGHTS: [f64; 6] = [25.0, 20.0, 15.0, 20.0, 12.0, 8.0];

const ESPRESSO_SLOT: usize = 1;

/// Builds the arrival stream for one test run.
#[derive(Clone, Debug)]
pub struct WorkloadGenerator {
    session_window_secs: u64,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

impl WorkloadGenerator {
    pub fn new(config: &SimConfig) -> Self {
        Self { session_window_secs: config.session_window_secs }
    }

    /// Generate `count` orders for `test_number` from `seed`.
    ///
    /// Orders come out in arrival order (arrival offsets are cumulative) with
    /// timestamps measured from session open.  Identical inputs always give
    /// identical output.
    pub fn generate(&self, test_number: u32, count: usize, seed: u64) -> CafeResult<Vec<Order>> {
        let profile = TestProfile::for_test(test_number);
        let weights = drink_weights(profile.espresso_chance);
        let mut rng = WorkloadRng::new(seed);

        let mut offset_secs: u64 = 0;
        let mut orders = Vec::with_capacity(count);

        for i in 0..count {
            let drink = pick_drink(&weights, rng.unit() * 100.0);
            let is_loyal = rng.unit() < profile.loyalty_chance;

            let mut gap = rng.exponential(profile.mean_interarrival_secs) as u64;
            if rng.gen_bool(LULL_CHANCE) {
                gap += LULL_MIN_SECS + rng.gen_range(0..LULL_SPREAD_SECS);
            }
            offset_secs = (offset_secs + gap).min(self.session_window_secs);

            orders.push(Order::new(
                OrderId(1_000 * test_number as u64 + i as u64),
                format!("Test{test_number}-Cust{}", i + 1),
                vec![drink],
                is_loyal,
                Timestamp::from_secs(offset_secs as i64),
            )?);
        }

        Ok(orders)
    }
}

/// Catalog weights with espresso set to `espresso_chance` and the other five
/// rescaled to fill the remainder in their original proportions.
///
/// At the default chance (0.20) this returns `BASE_DRINK_WEIGHTS` unchanged.
pub fn drink_weights(espresso_chance: f64) -> [f64; 6] {
    let espresso = espresso_chance.clamp(0.0, 1.0) * 100.0;
    let others_base = 100.0 - BASE_DRINK_WEIGHTS[ESPRESSO_SLOT];
    let scale = (100.0 - espresso) / others_base;

    let mut weights = BASE_DRINK_WEIGHTS;
    for (slot, w) in weights.iter_mut().enumerate() {
        *w = if slot == ESPRESSO_SLOT { espresso } else { *w * scale };
    }
    weights
}

/// Map a draw `r` in `[0, 100)` onto the cumulative `weights`.
pub fn pick_drink(weights: &[f64; 6], r: f64) -> DrinkKind {
    let mut upper = 0.0;
    for (kind, w) in DrinkKind::ALL.into_iter().zip(weights) {
        upper += w;
        if r < upper {
            return kind;
        }
    }
    // Rounding can leave the last bound a hair under 100.
    DrinkKind::SpecialtyMocha
}
