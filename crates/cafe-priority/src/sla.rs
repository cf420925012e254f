//! SLA thresholds, one-shot alert evaluation, and the queue ETA estimate.

use std::fmt;

use cafe_core::{Order, OrderId};

/// Past this wait the urgency term jumps to its boosted value.
pub const URGENCY_THRESHOLD_SECS: u64 = 480;

/// Start of the warning window (9 minutes).
pub const SLA_WARNING_SECS: u64 = 540;

/// The SLA itself (10 minutes).  Waits strictly longer count as violations;
/// the breach alert fires at exactly this value.
pub const SLA_BREACH_SECS: u64 = 600;

/// Floor on the per-position queue ETA.
pub const MIN_ETA_SECS: u64 = 60;

/// Rough service time attributed to each position in the queue.
pub const ETA_SECS_PER_POSITION: u64 = 30;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlaAlertKind {
    /// Waiting in `[540, 600)` seconds.
    Warning,
    /// Waiting `>= 600` seconds.
    Breach,
}

/// An alert raised for one order.  Informational only: a breach does not
/// cancel, requeue, or preempt anything.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlaAlert {
    pub order:     OrderId,
    pub customer:  String,
    pub kind:      SlaAlertKind,
    pub wait_secs: u64,
}

impl fmt::Display for SlaAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SlaAlertKind::Warning => write!(
                f,
                "order {} ({}) is nearing the SLA limit ({}s)",
                self.order, self.customer, self.wait_secs
            ),
            SlaAlertKind::Breach => write!(
                f,
                "order {} ({}) exceeded 10 minutes ({}s)",
                self.order, self.customer, self.wait_secs
            ),
        }
    }
}

/// Evaluate the SLA thresholds for `order` at `wait_secs`, setting the
/// matching one-shot flag.
///
/// Returns an alert only the first time each threshold is seen.  An order
/// that is first evaluated past 600 s raises only the breach.
pub fn check_sla(order: &mut Order, wait_secs: u64) -> Option<SlaAlert> {
    let kind = if wait_secs >= SLA_BREACH_SECS {
        order.mark_breach_sent().then_some(SlaAlertKind::Breach)?
    } else if wait_secs >= SLA_WARNING_SECS {
        order.mark_warning_sent().then_some(SlaAlertKind::Warning)?
    } else {
        return None;
    };
    Some(SlaAlert {
        order:    order.id(),
        customer: order.customer_name().to_owned(),
        kind,
        wait_secs,
    })
}

/// `true` if a wait of `wait_secs` violates the SLA.
#[inline]
pub fn violates_sla(wait_secs: u64) -> bool {
    wait_secs > SLA_BREACH_SECS
}

/// Coarse ETA for the order at zero-based `position` in the sorted queue.
#[inline]
pub fn queue_eta_secs(position: usize) -> u64 {
    ((position as u64 + 1) * ETA_SECS_PER_POSITION).max(MIN_ETA_SECS)
}
