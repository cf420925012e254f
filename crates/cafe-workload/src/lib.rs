//! `cafe-workload` — synthetic arrival streams for simulation runs.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`profile`]   | `TestProfile` (per-test distribution overrides)         |
//! | [`generator`] | `WorkloadGenerator`, drink weighting helpers            |
//!
//! # Quick-start
//!
//! ```rust
//! use cafe_workload::{TestProfile, WorkloadGenerator};
//!
//! let generator = WorkloadGenerator::default();
//! let orders = generator.generate(2, TestProfile::order_count(2), 2 * 12_345).unwrap();
//! assert_eq!(orders.len(), 300);
//! ```

pub mod generator;
pub mod profile;

#[cfg(test)]
mod tests;

pub use generator::{BASE_DRINK_WEIGHTS, WorkloadGenerator, drink_weights, pick_drink};
pub use profile::TestProfile;
