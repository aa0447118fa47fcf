//! Ticket evaluation: prize grading against a draw and odds estimates.

pub mod errors;
pub mod odds;
pub mod ticket;

pub use errors::{CheckError, OddsError};
pub use odds::{
    ANY_PRIZE_PROBABILITY, FIRST_PLACE_PROBABILITY, MAX_TICKETS, OddsEstimate, estimate_odds,
};
pub use ticket::{CheckResult, Grade, check_ticket, grade_ticket};
