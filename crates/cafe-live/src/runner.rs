//! `LiveRunner` — drives [`LiveScheduler::tick`] on a fixed period.
//!
//! One background thread, one tick per period.  A tick that takes longer
//! than the period is logged and the next tick starts immediately; ticks are
//! never queued up or skipped to catch up.

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use cafe_core::Timestamp;
use tracing::{error, info, warn};

use crate::LiveScheduler;

/// Handle to the tick thread.  Stops the thread when dropped.
pub struct LiveRunner {
    stop:   Option<Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl LiveRunner {
    /// Start ticking `scheduler` every `scheduler.config().tick_period()`.
    pub fn spawn(scheduler: Arc<LiveScheduler>) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let period = scheduler.config().tick_period();

        let handle = thread::Builder::new()
            .name("cafe-live-tick".into())
            .spawn(move || {
                info!(period_ms = period.as_millis() as u64, "tick loop started");
                let mut ticks: u64 = 0;
                loop {
                    let started = Instant::now();
                    if let Err(e) = scheduler.tick(Timestamp::now()) {
                        error!(error = %e, "tick failed");
                    }
                    ticks += 1;

                    let elapsed = started.elapsed();
                    let remaining = match period.checked_sub(elapsed) {
                        Some(r) => r,
                        None => {
                            warn!(elapsed_ms = elapsed.as_millis() as u64, "tick overran its period");
                            Duration::ZERO
                        }
                    };
                    match stop_rx.recv_timeout(remaining) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                info!(ticks, "tick loop stopped");
                ticks
            })?;

        Ok(Self { stop: Some(stop_tx), handle: Some(handle) })
    }

    /// Stop the loop and wait for the thread.  Returns the number of ticks run.
    pub fn stop(mut self) -> u64 {
        self.shutdown()
    }

    fn shutdown(&mut self) -> u64 {
        // Dropping the sender disconnects the channel, which also stops the loop.
        if let Some(tx) = self.stop.take() {
            let _ = tx.send(());
        }
        match self.handle.take().map(JoinHandle::join) {
            Some(Ok(ticks)) => ticks,
            Some(Err(_)) => {
                error!("tick thread panicked");
                0
            }
            None => 0,
        }
    }
}

impl Drop for LiveRunner {
    fn drop(&mut self) {
        self.shutdown();
    }
}
