use serde::{Deserialize, Serialize};

use lotto_core::COMBINATIONS;

use crate::errors::OddsError;

/// Chance that a single ticket takes first place.
pub const FIRST_PLACE_PROBABILITY: f64 = 1.0 / COMBINATIONS as f64;
/// Chance that a single ticket wins any prize tier.
pub const ANY_PRIZE_PROBABILITY: f64 = 1.0 / 42.0;
/// Largest ticket count accepted by `estimate_odds`.
pub const MAX_TICKETS: u32 = 100;

/// Chances of winning with several tickets in one draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsEstimate {
    pub tickets: u32,
    pub first_place_chance: f64,
    pub any_prize_chance: f64,
}

impl OddsEstimate {
    /// First-place odds in "1 in N" form.
    pub fn one_in_first(&self) -> f64 {
        1.0 / self.first_place_chance
    }

    /// Any-prize odds in "1 in N" form.
    pub fn one_in_any(&self) -> f64 {
        1.0 / self.any_prize_chance
    }
}

/// Estimate winning chances for `tickets` tickets.
///
/// Tickets are treated as independent trials, `1 - (1 - p)^n`. This is an
/// approximation: tickets in the same draw are not independent.
pub fn estimate_odds(tickets: u32) -> Result<OddsEstimate, OddsError> {
    if !(1..=MAX_TICKETS).contains(&tickets) {
        return Err(OddsError::TicketCount {
            count: tickets,
            max: MAX_TICKETS,
        });
    }

    Ok(OddsEstimate {
        tickets,
        first_place_chance: at_least_once(FIRST_PLACE_PROBABILITY, tickets),
        any_prize_chance: at_least_once(ANY_PRIZE_PROBABILITY, tickets),
    })
}

// 1 - (1 - p)^n without cancellation for tiny p.
fn at_least_once(probability: f64, trials: u32) -> f64 {
    -(f64::from(trials) * (-probability).ln_1p()).exp_m1()
}
