use rand::Rng;

use lotto_core::{Constraints, Number, NumberSet, SET_SIZE};

use crate::errors::GenerationError;
use crate::model::{GenerationRequest, MAX_SET_COUNT};

/// Draw one ticket honoring the include/exclude constraints.
///
/// Included numbers are always present; the rest are drawn without
/// replacement from the candidate pool, each draw uniform over what is left.
pub fn generate_one<R: Rng + ?Sized>(
    constraints: &Constraints,
    rng: &mut R,
) -> Result<NumberSet, GenerationError> {
    constraints.validate()?;

    let mut picked: Vec<Number> = constraints.include.iter().copied().collect();
    let mut pool = constraints.candidate_pool();

    while picked.len() < SET_SIZE && !pool.is_empty() {
        let idx = rng.random_range(0..pool.len());
        picked.push(pool.swap_remove(idx));
    }

    if picked.len() < SET_SIZE {
        return Err(GenerationError::PoolExhausted {
            drawn: picked.len(),
        });
    }

    Ok(NumberSet::new(picked)?)
}

/// Draw `set_count` independent tickets in generation order.
///
/// Tickets may repeat across the batch.
pub fn generate_many<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Vec<NumberSet>, GenerationError> {
    if !(1..=MAX_SET_COUNT).contains(&request.set_count) {
        return Err(GenerationError::InvalidRequest(format!(
            "set_count must be between 1 and {MAX_SET_COUNT}, got {}",
            request.set_count
        )));
    }
    request.constraints.validate()?;

    (0..request.set_count)
        .map(|_| generate_one(&request.constraints, &mut *rng))
        .collect()
}
