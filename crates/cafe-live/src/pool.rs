//! `WorkerPool` — the fixed set of baristas.
//!
//! A worker holds its current order by value, so an order in `Processing`
//! lives in exactly one place.  Workers are visited in index order and the
//! first idle one wins; there is no load balancing.

use std::time::Duration;

use cafe_core::{CafeError, CafeResult, Order, Timestamp, WorkerId};

// ── Worker ────────────────────────────────────────────────────────────────────

/// One barista.  Idle when `current` is `None`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worker {
    id:         WorkerId,
    current:    Option<Order>,
    busy_until: Option<Timestamp>,
}

impl Worker {
    fn new(id: WorkerId) -> Self {
        Self { id, current: None, busy_until: None }
    }

    #[inline] pub fn id(&self) -> WorkerId { self.id }
    #[inline] pub fn label(&self) -> String { self.id.to_string() }
    #[inline] pub fn is_busy(&self) -> bool { self.current.is_some() }
    #[inline] pub fn current_order(&self) -> Option<&Order> { self.current.as_ref() }
    #[inline] pub fn busy_until(&self) -> Option<Timestamp> { self.busy_until }
}

/// An assignment the pool refused.  The order is handed back untouched so
/// the caller can return it to the queue.
#[derive(Debug)]
pub struct Rejected {
    pub order: Order,
    pub error: CafeError,
}

// ── WorkerPool ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct WorkerPool {
    workers: Vec<Worker>,
}

impl WorkerPool {
    /// A pool of `count` idle workers, labelled "Barista 1" … "Barista n".
    pub fn new(count: usize) -> CafeResult<Self> {
        if count == 0 {
            return Err(CafeError::Config("worker pool needs at least one worker".into()));
        }
        let workers = (0..count)
            .map(|i| {
                WorkerId::try_from(i)
                    .map(Worker::new)
                    .map_err(|_| CafeError::Config(format!("worker count {count} is too large")))
            })
            .collect::<CafeResult<Vec<_>>>()?;
        Ok(Self { workers })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn get(&self, id: WorkerId) -> CafeResult<&Worker> {
        self.workers
            .get(id.index())
            .ok_or(CafeError::WorkerNotFound(id, self.workers.len()))
    }

    fn get_mut(&mut self, id: WorkerId) -> CafeResult<&mut Worker> {
        let len = self.workers.len();
        self.workers.get_mut(id.index()).ok_or(CafeError::WorkerNotFound(id, len))
    }

    /// The first idle worker in index order.
    pub fn find_idle_worker(&self) -> Option<WorkerId> {
        self.workers.iter().find(|w| !w.is_busy()).map(|w| w.id)
    }

    /// If `id` is busy and `now >= busy_until`, free it and return its order,
    /// now `Completed` and stamped with `now`.
    ///
    /// On error the worker keeps its order and stays busy.
    pub fn complete_if_due(&mut self, id: WorkerId, now: Timestamp) -> CafeResult<Option<Order>> {
        let worker = self.get_mut(id)?;
        match worker.busy_until {
            Some(until) if now >= until => {}
            _ => return Ok(None),
        }
        let Some(order) = worker.current.as_mut() else {
            worker.busy_until = None;
            return Ok(None);
        };
        order.complete(now)?;
        worker.busy_until = None;
        Ok(worker.current.take())
    }

    /// Seat `order` on worker `id` as-is, skipping the `Waiting` check.
    #[cfg(test)]
    pub(crate) fn seat_unchecked(&mut self, id: WorkerId, order: Order, busy_until: Timestamp) -> CafeResult<()> {
        let worker = self.get_mut(id)?;
        worker.current = Some(order);
        worker.busy_until = Some(busy_until);
        Ok(())
    }

    /// Hand `order` to worker `id` for `duration`, starting at `now`.
    ///
    /// The order moves to `Processing`.  A busy or unknown worker, or an
    /// order that is not `Waiting`, is refused and the order returned.
    pub fn assign(
        &mut self,
        id:        WorkerId,
        mut order: Order,
        now:       Timestamp,
        duration:  Duration,
    ) -> Result<(), Rejected> {
        let worker = match self.get_mut(id) {
            Ok(w) => w,
            Err(error) => return Err(Rejected { order, error }),
        };
        if worker.is_busy() {
            return Err(Rejected { order, error: CafeError::WorkerBusy(id) });
        }
        if let Err(error) = order.start(now) {
            return Err(Rejected { order, error });
        }
        worker.busy_until = Some(now + duration);
        worker.current = Some(order);
        Ok(())
    }
}
