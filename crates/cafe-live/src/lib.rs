//! `cafe-live` — the wall-clock barista scheduler.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`pool`]      | `Worker`, `WorkerPool`                                  |
//! | [`scheduler`] | `LiveScheduler`, `TickReport`, `LiveStats`              |
//! | [`runner`]    | `LiveRunner` (background tick thread)                   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cafe_core::LiveConfig;
//! use cafe_live::{LiveRunner, LiveScheduler};
//!
//! let scheduler = Arc::new(LiveScheduler::new(LiveConfig::default())?);
//! let runner = LiveRunner::spawn(Arc::clone(&scheduler))?;
//! scheduler.submit("Ada", &["ESPRESSO"], false)?;
//! // …
//! runner.stop();
//! ```

pub mod pool;
pub mod runner;
pub mod scheduler;


pub use pool::{Rejected, Worker, WorkerPool};
pub use runner::LiveRunner;
pub use scheduler::{LiveScheduler, LiveStats, TickReport};
