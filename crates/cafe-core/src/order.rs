//! The `Order` record and its lifecycle.
//!
//! # Lifecycle
//!
//! ```text
//! Waiting ──start(now)──▶ Processing ──complete(now)──▶ Completed
//! ```
//!
//! Transitions are one-way and cannot skip `Processing`; any other call
//! returns [`CafeError::InvalidTransition`] and leaves the order untouched.
//! There is no cancelled state: the only way out of `Processing` is
//! completion.

use std::fmt;

use crate::{CafeError, CafeResult, DrinkKind, OrderId, Timestamp};

// ── OrderStatus ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OrderStatus {
    #[default]
    Waiting,
    Processing,
    Completed,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Waiting    => "WAITING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Completed  => "COMPLETED",
        })
    }
}

// ── PriorityReason ────────────────────────────────────────────────────────────

/// Why an order holds its current priority.  Chosen by the scorer; stored on
/// the order so snapshots and exports can show it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriorityReason {
    Urgent,
    GoldMember,
    QuickOrder,
    LongWait,
    #[default]
    Standard,
}

impl PriorityReason {
    pub const fn label(self) -> &'static str {
        match self {
            PriorityReason::Urgent     => "Urgent: Approaching Timeout",
            PriorityReason::GoldMember => "Gold Member Priority",
            PriorityReason::QuickOrder => "Quick Order Bonus",
            PriorityReason::LongWait   => "Long Wait Time",
            PriorityReason::Standard   => "Standard",
        }
    }
}

impl fmt::Display for PriorityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Order ─────────────────────────────────────────────────────────────────────

/// A single customer request.
///
/// Identity, drinks, arrival, and loyalty are fixed at construction.  The
/// scheduler or simulator that owns the order updates its score, ETA, alert
/// flags, and lifecycle through the methods below; reporting layers only
/// ever see `&Order`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    id:                 OrderId,
    customer_name:      String,
    drinks:             Vec<DrinkKind>,
    total_prep_minutes: u32,
    arrival:            Timestamp,
    is_loyal:           bool,
    status:             OrderStatus,
    priority_score:     f64,
    priority_reason:    PriorityReason,
    started_at:         Option<Timestamp>,
    completed_at:       Option<Timestamp>,
    eta_secs:           u64,
    warning_sent:       bool,
    breach_sent:        bool,
}

impl Order {
    /// Create a `Waiting` order.
    ///
    /// Returns [`CafeError::EmptyOrder`] if `drinks` is empty.
    pub fn new(
        id:            OrderId,
        customer_name: impl Into<String>,
        drinks:        Vec<DrinkKind>,
        is_loyal:      bool,
        arrival:       Timestamp,
    ) -> CafeResult<Self> {
        if drinks.is_empty() {
            return Err(CafeError::EmptyOrder);
        }
        let total_prep_minutes = drinks.iter().map(|d| d.prep_minutes()).sum();
        Ok(Self {
            id,
            customer_name: customer_name.into(),
            drinks,
            total_prep_minutes,
            arrival,
            is_loyal,
            status:          OrderStatus::Waiting,
            priority_score:  0.0,
            priority_reason: PriorityReason::Standard,
            started_at:      None,
            completed_at:    None,
            eta_secs:        0,
            warning_sent:    false,
            breach_sent:     false,
        })
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline] pub fn id(&self) -> OrderId { self.id }
    #[inline] pub fn customer_name(&self) -> &str { &self.customer_name }
    #[inline] pub fn drinks(&self) -> &[DrinkKind] { &self.drinks }
    #[inline] pub fn arrival(&self) -> Timestamp { self.arrival }
    #[inline] pub fn is_loyal(&self) -> bool { self.is_loyal }
    #[inline] pub fn status(&self) -> OrderStatus { self.status }
    #[inline] pub fn priority_score(&self) -> f64 { self.priority_score }
    #[inline] pub fn priority_reason(&self) -> PriorityReason { self.priority_reason }
    #[inline] pub fn started_at(&self) -> Option<Timestamp> { self.started_at }
    #[inline] pub fn completed_at(&self) -> Option<Timestamp> { self.completed_at }
    #[inline] pub fn eta_secs(&self) -> u64 { self.eta_secs }
    #[inline] pub fn warning_sent(&self) -> bool { self.warning_sent }
    #[inline] pub fn breach_sent(&self) -> bool { self.breach_sent }

    /// Sum of per-drink prep minutes.  Fixed for the life of the order.
    #[inline]
    pub fn total_prep_minutes(&self) -> u32 {
        self.total_prep_minutes
    }

    pub fn total_price_rupees(&self) -> u32 {
        self.drinks.iter().map(|d| d.price_rupees()).sum()
    }

    /// Whole seconds this order has been (or had been) waiting at `now`.
    #[inline]
    pub fn wait_secs_at(&self, now: Timestamp) -> u64 {
        now.secs_since(self.arrival)
    }

    /// Arrival → completion in whole seconds; `None` until completed.
    pub fn total_wait_secs(&self) -> Option<u64> {
        self.completed_at.map(|done| done.secs_since(self.arrival))
    }

    // ── Scheduler-side mutation ───────────────────────────────────────────

    pub fn set_priority(&mut self, score: f64, reason: PriorityReason) {
        self.priority_score = score;
        self.priority_reason = reason;
    }

    pub fn set_eta_secs(&mut self, eta_secs: u64) {
        self.eta_secs = eta_secs;
    }

    /// Set the warning flag.  Returns `true` only on the first call.
    pub fn mark_warning_sent(&mut self) -> bool {
        !std::mem::replace(&mut self.warning_sent, true)
    }

    /// Set the breach flag.  Returns `true` only on the first call.
    pub fn mark_breach_sent(&mut self) -> bool {
        !std::mem::replace(&mut self.breach_sent, true)
    }

    /// `Waiting → Processing`, stamping the start time.
    pub fn start(&mut self, now: Timestamp) -> CafeResult<()> {
        self.transition(OrderStatus::Waiting, OrderStatus::Processing)?;
        self.started_at = Some(now.max(self.arrival));
        Ok(())
    }

    /// `Processing → Completed`, stamping the completion time.
    ///
    /// The stamp is clamped so `completed_at >= started_at` always holds.
    pub fn complete(&mut self, now: Timestamp) -> CafeResult<()> {
        self.transition(OrderStatus::Processing, OrderStatus::Completed)?;
        let floor = self.started_at.unwrap_or(self.arrival);
        self.completed_at = Some(now.max(floor));
        Ok(())
    }

    fn transition(&mut self, from: OrderStatus, to: OrderStatus) -> CafeResult<()> {
        if self.status != from {
            return Err(CafeError::InvalidTransition { order: self.id, from: self.status, to });
        }
        self.status = to;
        Ok(())
    }
}
