//! `LiveScheduler` — the wall-clock scheduling loop.
//!
//! # Tick
//!
//! ```text
//! ① Snapshot  — copy (id, wait, prep, loyal) for every waiting order   [lock]
//! ② Score     — PriorityScorer over the snapshot                    [no lock]
//! ③ Write back scores; raise one-shot SLA alerts                       [lock]
//! ④ Rank      — waiting set by score desc, ties by submission order
//! ⑤ ETA       — max(60, (position + 1) * 30) seconds per position
//! ⑥ Workers   — in index order: complete if due, then, if idle, take the
//!               best-ranked order still in the waiting set
//! ```
//!
//! Steps ③–⑥ run under a single lock hold.  An order is *moved* out of the
//! waiting map into its worker, so it is never in both places and never in
//! neither.  Submissions only take the lock to insert, so they can land at
//! any point of a tick; one that lands between ① and ③ keeps its
//! submission-time score until the next tick.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use cafe_core::{
    CafeResult, LiveConfig, Order, OrderId, PriorityReason, Timestamp, WorkerId, parse_drinks,
    secs_to_minutes,
};
use cafe_priority::{SlaAlert, SlaAlertKind, check_sla, queue_eta_secs, rescore, score, violates_sla};
use tracing::{debug, error, info, warn};

use crate::pool::{Worker, WorkerPool};

// ── Reports ───────────────────────────────────────────────────────────────────

/// What one tick did.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub completed: Vec<(WorkerId, OrderId)>,
    pub assigned:  Vec<(WorkerId, OrderId)>,
    pub alerts:    Vec<SlaAlert>,
}

/// Aggregate service statistics at an instant.
///
/// `avg_wait_minutes` covers completed orders only; the max and the SLA
/// count also include orders still waiting, measured against `now`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiveStats {
    pub orders_served:    usize,
    pub waiting:          usize,
    pub processing:       usize,
    pub avg_wait_minutes: f64,
    pub max_wait_minutes: f64,
    pub sla_violations:   usize,
}

// ── State ─────────────────────────────────────────────────────────────────────

struct SchedulerState {
    /// Authoritative waiting set.  Ids are issued in submission order, so
    /// key order is submission order.
    waiting:   BTreeMap<OrderId, Order>,
    pool:      WorkerPool,
    completed: Vec<Order>,
}

/// Inputs to the scorer for one waiting order, copied out under the lock.
struct ScoreInput {
    id:        OrderId,
    wait_secs: u64,
    prep:      u32,
    loyal:     bool,
}

// ── LiveScheduler ─────────────────────────────────────────────────────────────

/// Owns the waiting queue, the worker pool, and the completed history.
///
/// Share it as `Arc<LiveScheduler>`: every method takes `&self`.  Drive it
/// with [`LiveRunner`][crate::LiveRunner] or by calling [`tick`][Self::tick]
/// directly (tests do the latter with synthetic timestamps).
pub struct LiveScheduler {
    config:  LiveConfig,
    next_id: AtomicU64,
    state:   Mutex<SchedulerState>,
}

impl LiveScheduler {
    pub fn new(config: LiveConfig) -> CafeResult<Self> {
        config.validate()?;
        let pool = WorkerPool::new(config.worker_count)?;
        Ok(Self {
            config,
            next_id: AtomicU64::new(1),
            state:   Mutex::new(SchedulerState {
                waiting:   BTreeMap::new(),
                pool,
                completed: Vec::new(),
            }),
        })
    }

    pub fn config(&self) -> &LiveConfig {
        &self.config
    }

    // ── Submission ────────────────────────────────────────────────────────

    /// Accept a new order arriving now.
    ///
    /// Fails without side effects if any drink identifier is unknown or the
    /// list is empty.
    pub fn submit<S: AsRef<str>>(
        &self,
        customer_name: &str,
        drinks:        &[S],
        is_loyal:      bool,
    ) -> CafeResult<Order> {
        self.submit_at(customer_name, drinks, is_loyal, Timestamp::now())
    }

    /// [`submit`][Self::submit] with an explicit arrival time.
    pub fn submit_at<S: AsRef<str>>(
        &self,
        customer_name: &str,
        drinks:        &[S],
        is_loyal:      bool,
        arrival:       Timestamp,
    ) -> CafeResult<Order> {
        let drinks = parse_drinks(drinks)?;
        let id = OrderId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut order = Order::new(id, customer_name, drinks, is_loyal, arrival)?;
        rescore(&mut order, arrival);

        let snapshot = order.clone();
        self.lock().waiting.insert(id, order);
        info!(order = %id, customer = customer_name, prep_minutes = snapshot.total_prep_minutes(), "order received");
        Ok(snapshot)
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Run one scheduling pass as of `now`.
    pub fn tick(&self, now: Timestamp) -> CafeResult<TickReport> {
        // ── ① snapshot scorer inputs ──────────────────────────────────────
        let inputs: Vec<ScoreInput> = {
            let state = self.lock();
            state
                .waiting
                .values()
                .map(|o| ScoreInput {
                    id:        o.id(),
                    wait_secs: o.wait_secs_at(now),
                    prep:      o.total_prep_minutes(),
                    loyal:     o.is_loyal(),
                })
                .collect()
        };

        // ── ② score outside the critical section ─────────────────────────
        let scored: Vec<_> = inputs
            .into_iter()
            .map(|i| (i.id, i.wait_secs, score(i.wait_secs, i.prep, i.loyal)))
            .collect();

        let mut guard = self.lock();
        let state = &mut *guard;
        let mut report = TickReport::default();

        // ── ③ write back and evaluate SLA thresholds ─────────────────────
        for (id, wait_secs, priority) in scored {
            let Some(order) = state.waiting.get_mut(&id) else {
                continue;
            };
            order.set_priority(priority.score, priority.reason);
            if let Some(alert) = check_sla(order, wait_secs) {
                match alert.kind {
                    SlaAlertKind::Warning => warn!(order = %alert.order, wait_secs, "SLA warning: {alert}"),
                    SlaAlertKind::Breach  => error!(order = %alert.order, wait_secs, "SLA breached: {alert}"),
                }
                report.alerts.push(alert);
            }
        }

        // ── ④ rank, ⑤ ETA ────────────────────────────────────────────────
        let ranked = rank(&state.waiting);
        for (position, id) in ranked.iter().enumerate() {
            if let Some(order) = state.waiting.get_mut(id) {
                order.set_eta_secs(queue_eta_secs(position));
            }
        }

        // ── ⑥ complete and assign ─────────────────────────────────────────
        let mut candidates = ranked.into_iter();
        let worker_ids: Vec<WorkerId> = state.pool.workers().iter().map(Worker::id).collect();
        for worker in worker_ids {
            if let Some(done) = state.pool.complete_if_due(worker, now)? {
                info!(order = %done.id(), %worker, "order completed");
                report.completed.push((worker, done.id()));
                state.completed.push(done);
            }

            if state.pool.get(worker)?.is_busy() {
                continue;
            }
            // Re-validate membership: skip anything no longer waiting.
            let Some(order) = candidates.by_ref().find_map(|id| state.waiting.remove(&id)) else {
                continue;
            };

            let id = order.id();
            let urgent = order.priority_reason() == PriorityReason::Urgent;
            let duration = self.config.prep_duration(order.total_prep_minutes());
            if let Err(rejected) = state.pool.assign(worker, order, now, duration) {
                state.waiting.insert(rejected.order.id(), rejected.order);
                return Err(rejected.error);
            }
            if urgent {
                warn!(order = %id, %worker, "emergency assignment");
            }
            info!(order = %id, %worker, busy_secs = duration.as_secs(), "order assigned");
            report.assigned.push((worker, id));
        }

        debug!(
            waiting   = state.waiting.len(),
            assigned  = report.assigned.len(),
            completed = report.completed.len(),
            "tick"
        );
        Ok(report)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Waiting orders, highest priority first.
    pub fn queue(&self) -> Vec<Order> {
        let state = self.lock();
        rank(&state.waiting)
            .into_iter()
            .filter_map(|id| state.waiting.get(&id).cloned())
            .collect()
    }

    pub fn workers(&self) -> Vec<Worker> {
        self.lock().pool.workers().to_vec()
    }

    /// Completed orders in completion order.
    pub fn completed(&self) -> Vec<Order> {
        self.lock().completed.clone()
    }

    pub fn stats(&self, now: Timestamp) -> LiveStats {
        let state = self.lock();

        let done_waits: Vec<u64> = state.completed.iter().filter_map(Order::total_wait_secs).collect();
        let live_waits: Vec<u64> = state.waiting.values().map(|o| o.wait_secs_at(now)).collect();

        let avg_wait_minutes = if done_waits.is_empty() {
            0.0
        } else {
            secs_to_minutes(done_waits.iter().sum()) / done_waits.len() as f64
        };
        let max_wait = done_waits.iter().chain(&live_waits).copied().max().unwrap_or(0);
        let sla_violations = done_waits
            .iter()
            .chain(&live_waits)
            .filter(|&&w| violates_sla(w))
            .count();

        LiveStats {
            orders_served: state.completed.len(),
            waiting: state.waiting.len(),
            processing: state.pool.workers().iter().filter(|w| w.is_busy()).count(),
            avg_wait_minutes,
            max_wait_minutes: secs_to_minutes(max_wait),
            sla_violations,
        }
    }

    // Every mutation leaves the state consistent; a poisoned lock is reused.
    fn lock(&self) -> MutexGuard<'_, SchedulerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Waiting ids by score descending.  `sort_by` is stable and the map
/// iterates in id order, so equal scores keep submission order.
fn rank(waiting: &BTreeMap<OrderId, Order>) -> Vec<OrderId> {
    let mut ranked: Vec<(OrderId, f64)> =
        waiting.values().map(|o| (o.id(), o.priority_score())).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(id, _)| id).collect()
}
