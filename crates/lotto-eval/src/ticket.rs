use std::fmt;

use serde::{Deserialize, Serialize};

use lotto_core::{Number, NumberSet};

use crate::errors::CheckError;

/// Prize tier of a checked ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    NoPrize,
}

impl Grade {
    /// Grade table; the first matching row wins.
    pub fn from_matches(match_count: usize, bonus_match: bool) -> Self {
        match (match_count, bonus_match) {
            (6, _) => Grade::First,
            (5, true) => Grade::Second,
            (5, false) => Grade::Third,
            (4, _) => Grade::Fourth,
            (3, _) => Grade::Fifth,
            _ => Grade::NoPrize,
        }
    }

    pub fn is_prize(self) -> bool {
        self != Grade::NoPrize
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::First => "1st place",
            Grade::Second => "2nd place",
            Grade::Third => "3rd place",
            Grade::Fourth => "4th place",
            Grade::Fifth => "5th place",
            Grade::NoPrize => "no prize",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of comparing a ticket with a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub match_count: usize,
    pub bonus_match: bool,
    /// Winning numbers found on the ticket, ascending.
    pub matched: Vec<Number>,
    pub grade: Grade,
}

/// Grade an already validated ticket.
pub fn grade_ticket(winning: &NumberSet, bonus: Number, mine: &NumberSet) -> CheckResult {
    let matched = winning.intersection(mine);
    let match_count = matched.len();
    let bonus_match = mine.contains(bonus);

    CheckResult {
        match_count,
        bonus_match,
        matched,
        grade: Grade::from_matches(match_count, bonus_match),
    }
}

/// Grade raw checker input, naming the first malformed field.
pub fn check_ticket(winning: &[u8], bonus: u8, mine: &[u8]) -> Result<CheckResult, CheckError> {
    let winning = NumberSet::from_values(winning).map_err(|err| CheckError::field("winning", err))?;
    let bonus = Number::new(bonus).map_err(|err| CheckError::field("bonus", err))?;
    let mine = NumberSet::from_values(mine).map_err(|err| CheckError::field("mine", err))?;

    Ok(grade_ticket(&winning, bonus, &mine))
}
