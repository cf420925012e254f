//! `cafe-core` — foundational types for the barista scheduling engine.
//!
//! This crate is a dependency of every other `cafe-*` crate.  It has no
//! `cafe-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`ids`]    | `OrderId`, `WorkerId`                                      |
//! | [`time`]   | `Timestamp` (milliseconds on an epoch)                     |
//! | [`drink`]  | `DrinkKind` catalog, `parse_drinks`                        |
//! | [`order`]  | `Order`, `OrderStatus`, `PriorityReason`                   |
//! | [`config`] | `LiveConfig`, `SimConfig`, `CafeConfig`                    |
//! | [`rng`]    | `WorkloadRng`                                              |
//! | [`error`]  | `CafeError`, `CafeResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod drink;
pub mod error;
pub mod ids;
pub mod order;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CafeConfig, LiveConfig, SimConfig};
pub use drink::{DrinkKind, parse_drinks};
pub use error::{CafeError, CafeResult};
pub use ids::{OrderId, WorkerId};
pub use order::{Order, OrderStatus, PriorityReason};
pub use rng::WorkloadRng;
pub use time::{Timestamp, secs_to_minutes};
