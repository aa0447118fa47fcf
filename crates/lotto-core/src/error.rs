use thiserror::Error;

use crate::number::{MAX_NUMBER, MIN_NUMBER, SET_SIZE};

/// Core error type shared across lotto crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A value outside the playable range.
    #[error("number {value} is outside {}..={}", MIN_NUMBER, MAX_NUMBER)]
    OutOfRange { value: u8 },
    /// A number set with the wrong amount of numbers.
    #[error("expected {} numbers, found {found}", SET_SIZE)]
    WrongSize { found: usize },
    /// The same number appears twice in a set.
    #[error("number {0} appears more than once")]
    Duplicate(u8),
    /// A favorites position that does not exist.
    #[error("no favorite at position {position} (list has {len})")]
    NoSuchFavorite { position: usize, len: usize },
    /// A theme name that is neither light nor dark.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Convenience alias for results returned by lotto crates.
pub type Result<T> = std::result::Result<T, CoreError>;
