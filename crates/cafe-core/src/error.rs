//! Core error type.
//!
//! Sub-crates define their own error enums where they have failure modes of
//! their own (`SimError`, `OutputError`) and wrap `CafeError` as one variant.

use thiserror::Error;

use crate::{OrderId, OrderStatus, WorkerId};

#[derive(Debug, Error)]
pub enum CafeError {
    #[error("unknown drink identifier {0:?}")]
    UnknownDrink(String),

    #[error("an order must contain at least one drink")]
    EmptyOrder,

    #[error("{0} is busy and cannot take another order")]
    WorkerBusy(WorkerId),

    #[error("{0} does not exist in a pool of {1} workers")]
    WorkerNotFound(WorkerId, usize),

    #[error("order {order} cannot move from {from} to {to}")]
    InvalidTransition {
        order: OrderId,
        from:  OrderStatus,
        to:    OrderStatus,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `cafe-*` crates.
pub type CafeResult<T> = Result<T, CafeError>;
