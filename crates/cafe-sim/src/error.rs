use cafe_core::CafeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// An iteration admitted no arrival and assigned no order.  The clock
    /// rule guarantees progress, so this is a bug, never a normal outcome.
    #[error("simulation stalled at {clock_secs}s with {processed}/{requested} orders processed ({waiting} waiting)")]
    Stalled {
        clock_secs: i64,
        processed:  usize,
        requested:  usize,
        waiting:    usize,
    },

    #[error(transparent)]
    Core(#[from] CafeError),
}

pub type SimResult<T> = Result<T, SimError>;
