//! `cafe-sim` — deterministic discrete-event replay of the scheduling policy.
//!
//! The simulator runs the same scorer as the live scheduler over a synthetic
//! arrival stream, with no wall-clock reads, so a test number always gives
//! the same schedule.  See [`engine`] for the loop.
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`engine`]   | `EventSimulator`, `SimOutcome`                           |
//! | [`run`]      | `TestRun` (aggregate stats + processed orders)           |
//! | [`service`]  | `SimulationService` (workloads, history)                 |
//! | [`observer`] | `SimObserver`, `NoopObserver`                            |
//! | [`error`]    | `SimError`, `SimResult`                                  |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `run_batch` runs independent tests on Rayon's pool.    |
//! | `serde`    | `Serialize`/`Deserialize` on `TestRun`.                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cafe_core::SimConfig;
//! use cafe_sim::SimulationService;
//!
//! let mut service = SimulationService::new(SimConfig::default())?;
//! let run = service.run_simulation(2)?;
//! println!("{} SLA violations", run.sla_violations());
//! ```

pub mod engine;
pub mod error;
pub mod observer;
pub mod run;
pub mod service;


pub use engine::{EventSimulator, SimOutcome};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use run::TestRun;
pub use service::SimulationService;
