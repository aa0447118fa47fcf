use lotto_core::Constraints;
use serde::{Deserialize, Serialize};

/// Largest batch a single request may ask for.
pub const MAX_SET_COUNT: u8 = 10;

/// Options for the generation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Fixed RNG seed; `None` draws from the thread-local entropy source.
    pub seed: Option<u64>,
}

/// Constraints plus how many tickets to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub constraints: Constraints,
    pub set_count: u8,
}

impl GenerationRequest {
    pub fn new(constraints: Constraints, set_count: u8) -> Self {
        Self {
            constraints,
            set_count,
        }
    }
}

/// Summary of a generation batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub batch_id: String,
    pub sets_requested: u8,
    pub sets_generated: usize,
    pub included: usize,
    pub excluded: usize,
    /// Numbers left to draw from after constraints were applied.
    pub pool_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub duration_us: u64,
}
