//! Constrained ticket generation for the lotto picker.
//!
//! Tickets are drawn uniformly from whatever the include/exclude constraints
//! leave available. Runs are reproducible when a seed is supplied.

pub mod engine;
pub mod errors;
pub mod model;
pub mod sampler;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, GenerationRequest, MAX_SET_COUNT};
pub use sampler::{generate_many, generate_one};
