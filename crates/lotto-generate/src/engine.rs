use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use lotto_core::NumberSet;

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport, GenerationRequest};
use crate::sampler::generate_many;

/// Result of a generation batch.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub sets: Vec<NumberSet>,
    pub report: GenerationReport,
}

/// Entry point for drawing batches of tickets.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let batch_id = uuid::Uuid::new_v4().to_string();
        let constraints = &request.constraints;

        info!(
            batch_id = %batch_id,
            sets = request.set_count,
            included = constraints.include.len(),
            excluded = constraints.exclude.len(),
            seed = ?self.options.seed,
            "generation started"
        );

        let outcome = match self.options.seed {
            Some(seed) => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                generate_many(request, &mut rng)
            }
            None => generate_many(request, &mut rand::rng()),
        };

        let sets = match outcome {
            Ok(sets) => sets,
            Err(err) => {
                warn!(batch_id = %batch_id, error = %err, "generation rejected");
                return Err(err);
            }
        };

        let report = GenerationReport {
            batch_id,
            sets_requested: request.set_count,
            sets_generated: sets.len(),
            included: constraints.include.len(),
            excluded: constraints.exclude.len(),
            pool_size: constraints.candidate_pool().len(),
            seed: self.options.seed,
            duration_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
        };

        info!(
            batch_id = %report.batch_id,
            sets_generated = report.sets_generated,
            pool_size = report.pool_size,
            duration_us = report.duration_us,
            "generation completed"
        );

        Ok(GenerationResult { sets, report })
    }
}
