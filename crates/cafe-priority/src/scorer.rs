//! The priority formula.
//!
//! # Components
//!
//! ```text
//! wait        = wait_secs / 600 * 100 * 0.40                  (uncapped)
//! complexity  = max(0, (10 - prep_minutes) / 10 * 100 * 0.25)
//! loyalty     = 10 if loyal else 0
//! urgency     = 75                      if wait_secs > 480
//!               wait_secs / 480 * 25    otherwise
//! score       = wait + complexity + loyalty + urgency
//! ```
//!
//! The wait term has no ceiling, so every order eventually outranks any
//! fresh one.  Past the 8-minute mark the urgency term jumps from 25 to 75.

use cafe_core::{Order, PriorityReason, Timestamp};

use crate::sla::{SLA_BREACH_SECS, URGENCY_THRESHOLD_SECS};

const WAIT_WEIGHT:          f64 = 0.40;
const COMPLEXITY_WEIGHT:    f64 = 0.25;
const COMPLEXITY_CEILING:   f64 = 10.0;
const LOYALTY_BONUS:        f64 = 10.0;
const URGENCY_BASE:         f64 = 25.0;
const URGENCY_BOOST:        f64 = 50.0;

/// The four weighted terms that make up a score.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    pub wait:       f64,
    pub complexity: f64,
    pub loyalty:    f64,
    pub urgency:    f64,
}

impl ScoreBreakdown {
    #[inline]
    pub fn total(&self) -> f64 {
        self.wait + self.complexity + self.loyalty + self.urgency
    }
}

/// Result of scoring one order at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priority {
    pub score:      f64,
    pub reason:     PriorityReason,
    pub breakdown:  ScoreBreakdown,
}

/// Score an order from its current wait, summed prep time, and loyalty.
///
/// Pure: the same inputs always give the same output.
pub fn score(wait_secs: u64, total_prep_minutes: u32, is_loyal: bool) -> Priority {
    let wait = wait_secs as f64;

    let breakdown = ScoreBreakdown {
        wait:       wait / SLA_BREACH_SECS as f64 * 100.0 * WAIT_WEIGHT,
        complexity: ((COMPLEXITY_CEILING - total_prep_minutes as f64) / COMPLEXITY_CEILING
            * 100.0
            * COMPLEXITY_WEIGHT)
            .max(0.0),
        loyalty:    if is_loyal { LOYALTY_BONUS } else { 0.0 },
        urgency:    urgency_component(wait_secs),
    };
    let score = breakdown.total();

    Priority {
        score,
        reason: reason_for(&breakdown, score, is_loyal),
        breakdown,
    }
}

/// Score `order` as of `now` and write the result back onto it.
pub fn rescore(order: &mut Order, now: Timestamp) -> Priority {
    let priority = score(order.wait_secs_at(now), order.total_prep_minutes(), order.is_loyal());
    order.set_priority(priority.score, priority.reason);
    priority
}

/// Linear ramp to 25 over the first eight minutes, then a flat 75.
#[inline]
pub fn urgency_component(wait_secs: u64) -> f64 {
    if wait_secs > URGENCY_THRESHOLD_SECS {
        URGENCY_BASE + URGENCY_BOOST
    } else {
        wait_secs as f64 / URGENCY_THRESHOLD_SECS as f64 * URGENCY_BASE
    }
}

// First match wins.
fn reason_for(b: &ScoreBreakdown, total: f64, is_loyal: bool) -> PriorityReason {
    if b.urgency > 30.0 {
        PriorityReason::Urgent
    } else if is_loyal && total > 50.0 {
        PriorityReason::GoldMember
    } else if b.complexity > 20.0 {
        PriorityReason::QuickOrder
    } else if b.wait > 20.0 {
        PriorityReason::LongWait
    } else {
        PriorityReason::Standard
    }
}
