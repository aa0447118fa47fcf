use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;
use crate::number::{MAX_NUMBER, Number, SET_SIZE};

/// User-forced presence (`include`) and absence (`exclude`) of numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Constraints {
    #[serde(default)]
    pub include: BTreeSet<Number>,
    #[serde(default)]
    pub exclude: BTreeSet<Number>,
}

/// Reason a set of constraints cannot produce a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("too many included numbers: {count} (at most {})", SET_SIZE)]
    TooManyIncluded { count: usize },
    #[error("include/exclude overlap: {}", join_numbers(.numbers))]
    Overlap { numbers: Vec<Number> },
    #[error("too many excluded numbers: {remaining} left, {} needed", SET_SIZE)]
    TooManyExcluded { remaining: usize },
}

impl ConstraintViolation {
    /// Short, stable reason without the numeric detail.
    pub fn reason(&self) -> &'static str {
        match self {
            ConstraintViolation::TooManyIncluded { .. } => "too many included numbers",
            ConstraintViolation::Overlap { .. } => "include/exclude overlap",
            ConstraintViolation::TooManyExcluded { .. } => "too many excluded numbers",
        }
    }
}

impl Constraints {
    pub fn new(
        include: impl IntoIterator<Item = Number>,
        exclude: impl IntoIterator<Item = Number>,
    ) -> Self {
        Self {
            include: include.into_iter().collect(),
            exclude: exclude.into_iter().collect(),
        }
    }

    /// Build constraints from raw integers. Repeated values collapse.
    pub fn from_values(include: &[u8], exclude: &[u8]) -> Result<Self> {
        let include = include
            .iter()
            .map(|value| Number::new(*value))
            .collect::<Result<BTreeSet<_>>>()?;
        let exclude = exclude
            .iter()
            .map(|value| Number::new(*value))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { include, exclude })
    }

    /// Reject constraints that cannot yield a full ticket.
    ///
    /// Checks run in a fixed order: include size, overlap, then how many
    /// numbers the exclusions leave.
    pub fn validate(&self) -> std::result::Result<(), ConstraintViolation> {
        if self.include.len() > SET_SIZE {
            return Err(ConstraintViolation::TooManyIncluded {
                count: self.include.len(),
            });
        }

        let overlap: Vec<Number> = self.include.intersection(&self.exclude).copied().collect();
        if !overlap.is_empty() {
            return Err(ConstraintViolation::Overlap { numbers: overlap });
        }

        let remaining = usize::from(MAX_NUMBER).saturating_sub(self.exclude.len());
        if remaining < SET_SIZE {
            return Err(ConstraintViolation::TooManyExcluded { remaining });
        }

        Ok(())
    }

    /// Numbers still free to draw: neither included nor excluded, ascending.
    pub fn candidate_pool(&self) -> Vec<Number> {
        Number::all()
            .filter(|number| !self.include.contains(number) && !self.exclude.contains(number))
            .collect()
    }
}

fn join_numbers(numbers: &[Number]) -> String {
    numbers
        .iter()
        .map(Number::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
