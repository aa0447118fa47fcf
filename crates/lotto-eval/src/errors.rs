use lotto_core::CoreError;
use thiserror::Error;

/// Malformed checker input, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl CheckError {
    pub(crate) fn field(field: &'static str, err: CoreError) -> Self {
        CheckError::InvalidField {
            field,
            reason: err.to_string(),
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            CheckError::InvalidField { field, .. } => *field,
        }
    }
}

/// Odds requested for an unsupported amount of tickets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OddsError {
    #[error("ticket count must be between 1 and {max}, got {count}")]
    TicketCount { count: u32, max: u32 },
}
