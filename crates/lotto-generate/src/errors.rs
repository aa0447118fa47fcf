use lotto_core::{ConstraintViolation, CoreError, SET_SIZE};
use thiserror::Error;

/// Errors emitted while generating tickets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("infeasible constraints: {0}")]
    Constraints(#[from] ConstraintViolation),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("candidate pool exhausted after {drawn} of {} numbers", SET_SIZE)]
    PoolExhausted { drawn: usize },
    #[error("invalid ticket: {0}")]
    Core(#[from] CoreError),
}
