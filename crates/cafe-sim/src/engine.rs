//! `EventSimulator` — the discrete-event loop.
//!
//! # Iteration
//!
//! ```text
//! while processed < requested:
//!   ① next_arrival   = arrival time of the next unadmitted order
//!      earliest_free  = min(available_at)
//!   ② clock ← waiting empty              → next_arrival
//!            next_arrival < earliest_free → next_arrival
//!            otherwise                    → earliest_free
//!   ③ admit every order with arrival ≤ clock
//!   ④ drain the heap, re-score at clock, rebuild
//!   ⑤ while a worker is free at clock and the heap is non-empty:
//!        pop best → lowest-index free worker;
//!        available_at = clock + prep_minutes * 60
//!   ⑥ nothing admitted and nothing assigned → SimError::Stalled
//! ```
//!
//! The clock never moves backwards.  Step ② always lands on an instant where
//! either an arrival is admitted or a worker is free with work waiting, so
//! ⑥ is unreachable unless the loop itself is broken.
//!
//! Step ⑤ assigns exhaustively within one instant.  Re-scoring at an
//! unchanged clock cannot reorder the heap, so this gives the same schedule
//! as assigning one order per iteration.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use cafe_core::{Order, OrderId, Timestamp, WorkerId};
use cafe_priority::rescore;

use crate::{SimError, SimObserver, SimResult};

// ── Heap entry ────────────────────────────────────────────────────────────────

/// A waiting order keyed by its score at the current clock.
///
/// Max-heap order: higher score first, then earlier arrival, then lower id.
struct Queued {
    score: f64,
    order: Order,
}

impl Queued {
    fn key(&self) -> (f64, Timestamp, OrderId) {
        (self.score, self.order.arrival(), self.order.id())
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        let (s1, a1, i1) = self.key();
        let (s2, a2, i2) = other.key();
        s1.total_cmp(&s2)
            .then_with(|| a2.cmp(&a1))
            .then_with(|| i2.cmp(&i1))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Raw result of one simulation run, before statistics.
#[derive(Clone, Debug)]
pub struct SimOutcome {
    /// Processed orders sorted by arrival (ties keep processing order).
    pub orders:        Vec<Order>,
    /// Orders completed per worker, indexed by `WorkerId`.
    pub worker_counts: Vec<usize>,
    /// The clock when the last order was assigned.
    pub final_clock:   Timestamp,
}

// ── EventSimulator ────────────────────────────────────────────────────────────

/// Replays an arrival stream through the shared scoring policy.
///
/// Single-threaded and free of wall-clock reads: the same input always gives
/// the same outcome.
#[derive(Clone, Debug)]
pub struct EventSimulator {
    worker_count: usize,
}

impl EventSimulator {
    pub fn new(worker_count: usize) -> SimResult<Self> {
        if worker_count == 0 {
            return Err(SimError::Config("at least one worker is required".into()));
        }
        if WorkerId::try_from(worker_count - 1).is_err() {
            return Err(SimError::Config(format!("{worker_count} workers is too many")));
        }
        Ok(Self { worker_count })
    }

    #[inline]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Process every order in `orders` (any order; sorted by arrival here).
    pub fn run<O: SimObserver>(&self, mut orders: Vec<Order>, observer: &mut O) -> SimResult<SimOutcome> {
        orders.sort_by_key(Order::arrival);
        let requested = orders.len();
        let mut incoming: VecDeque<Order> = orders.into();

        let mut clock = Timestamp::ZERO;
        let mut available_at = vec![Timestamp::ZERO; self.worker_count];
        let mut worker_counts = vec![0usize; self.worker_count];
        let mut heap: BinaryHeap<Queued> = BinaryHeap::new();
        let mut processed: Vec<Order> = Vec::with_capacity(requested);

        while processed.len() < requested {
            // ── ① next events ────────────────────────────────────────────
            let next_arrival = incoming.front().map(Order::arrival);
            let earliest_free = available_at.iter().copied().min().unwrap_or(Timestamp::ZERO);

            // ── ② advance the clock ──────────────────────────────────────
            let target = match next_arrival {
                Some(arrival) if heap.is_empty() || arrival < earliest_free => arrival,
                _ if !heap.is_empty() => earliest_free,
                _ => {
                    return Err(SimError::Stalled {
                        clock_secs: clock.as_secs(),
                        processed:  processed.len(),
                        requested,
                        waiting:    0,
                    });
                }
            };
            clock = clock.max(target);

            // ── ③ admit arrivals ─────────────────────────────────────────
            let mut admitted = 0usize;
            while incoming.front().is_some_and(|o| o.arrival() <= clock) {
                if let Some(order) = incoming.pop_front() {
                    observer.on_admit(clock, &order);
                    heap.push(Queued { score: 0.0, order });
                    admitted += 1;
                }
            }

            // ── ④ re-score at the new clock ──────────────────────────────
            let mut entries = std::mem::take(&mut heap).into_vec();
            for entry in &mut entries {
                entry.score = rescore(&mut entry.order, clock).score;
            }
            heap = BinaryHeap::from(entries);

            // ── ⑤ assign greedily ────────────────────────────────────────
            let mut assigned = 0usize;
            while !heap.is_empty() {
                let Some(slot) = available_at.iter().position(|&t| t <= clock) else {
                    break;
                };
                let Some(Queued { mut order, .. }) = heap.pop() else {
                    break;
                };
                let worker = WorkerId(slot as u16);
                let done_at = clock.plus_secs(order.total_prep_minutes() as u64 * 60);

                order.start(clock)?;
                order.complete(done_at)?;
                available_at[slot] = done_at;
                worker_counts[slot] += 1;
                assigned += 1;

                observer.on_assign(clock, worker, &order);
                processed.push(order);
            }

            let idle = available_at.iter().filter(|&&t| t <= clock).count();
            observer.on_step(clock, idle, heap.len());

            // ── ⑥ progress check ─────────────────────────────────────────
            if admitted == 0 && assigned == 0 {
                return Err(SimError::Stalled {
                    clock_secs: clock.as_secs(),
                    processed:  processed.len(),
                    requested,
                    waiting:    heap.len(),
                });
            }
        }

        observer.on_run_end(clock, processed.len());
        processed.sort_by_key(Order::arrival);

        Ok(SimOutcome {
            orders: processed,
            worker_counts,
            final_clock: clock,
        })
    }
}
