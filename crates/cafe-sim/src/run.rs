//! `TestRun` — the immutable record of one simulated session.

use std::collections::BTreeMap;

use cafe_core::{DrinkKind, Order, secs_to_minutes};
use cafe_priority::violates_sla;
use uuid::Uuid;

use crate::SimOutcome;

/// Aggregate results of one replay, plus every processed order.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestRun {
    id:               Uuid,
    test_number:      u32,
    profile_name:     String,
    total_orders:     usize,
    avg_wait_minutes: f64,
    max_wait_minutes: f64,
    worker_counts:    Vec<usize>,
    sla_violations:   usize,
    orders:           Vec<Order>,
}

impl TestRun {
    /// Summarise a simulator outcome.  An empty stream gives all-zero stats.
    pub fn from_outcome(test_number: u32, profile_name: &str, total_orders: usize, outcome: SimOutcome) -> Self {
        let waits: Vec<u64> = outcome
            .orders
            .iter()
            .filter_map(Order::total_wait_secs)
            .collect();

        let avg_wait_minutes = if waits.is_empty() {
            0.0
        } else {
            secs_to_minutes(waits.iter().sum::<u64>()) / waits.len() as f64
        };
        let max_wait_minutes = waits.iter().copied().max().map_or(0.0, secs_to_minutes);
        let sla_violations = waits.iter().filter(|&&w| violates_sla(w)).count();

        Self {
            id: Uuid::new_v4(),
            test_number,
            profile_name: profile_name.to_owned(),
            total_orders,
            avg_wait_minutes,
            max_wait_minutes,
            worker_counts: outcome.worker_counts,
            sla_violations,
            orders: outcome.orders,
        }
    }

    #[inline] pub fn id(&self) -> Uuid { self.id }
    #[inline] pub fn test_number(&self) -> u32 { self.test_number }
    #[inline] pub fn profile_name(&self) -> &str { &self.profile_name }
    #[inline] pub fn total_orders(&self) -> usize { self.total_orders }
    #[inline] pub fn avg_wait_minutes(&self) -> f64 { self.avg_wait_minutes }
    #[inline] pub fn max_wait_minutes(&self) -> f64 { self.max_wait_minutes }
    #[inline] pub fn worker_counts(&self) -> &[usize] { &self.worker_counts }
    #[inline] pub fn sla_violations(&self) -> usize { self.sla_violations }

    /// Processed orders, sorted by arrival.
    #[inline] pub fn orders(&self) -> &[Order] { &self.orders }

    /// Drink items served per kind, across all orders.
    pub fn drink_breakdown(&self) -> BTreeMap<DrinkKind, usize> {
        let mut counts = BTreeMap::new();
        for drink in self.orders.iter().flat_map(|o| o.drinks().iter().copied()) {
            *counts.entry(drink).or_insert(0) += 1;
        }
        counts
    }
}
