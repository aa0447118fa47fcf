use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Smallest playable number.
pub const MIN_NUMBER: u8 = 1;
/// Largest playable number.
pub const MAX_NUMBER: u8 = 45;
/// Amount of numbers on one ticket.
pub const SET_SIZE: usize = 6;
/// Distinct tickets that can be drawn, `C(45, 6)`.
pub const COMBINATIONS: u64 = 8_145_060;

/// A single playable number in `MIN_NUMBER..=MAX_NUMBER`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "u8", into = "u8")]
#[schemars(transparent)]
pub struct Number(u8);

impl Number {
    pub fn new(value: u8) -> Result<Self> {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::OutOfRange { value })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every playable number in ascending order.
    pub fn all() -> impl Iterator<Item = Number> {
        (MIN_NUMBER..=MAX_NUMBER).map(Number)
    }

    pub fn band(self) -> Band {
        Band::of(self)
    }
}

impl TryFrom<u8> for Number {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        Number::new(value)
    }
}

impl From<Number> for u8 {
    fn from(number: Number) -> Self {
        number.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Six distinct numbers sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "Vec<Number>", into = "Vec<Number>")]
#[schemars(transparent)]
pub struct NumberSet([Number; SET_SIZE]);

impl NumberSet {
    /// Build a set from any ordering of six distinct numbers.
    pub fn new(numbers: impl IntoIterator<Item = Number>) -> Result<Self> {
        let mut numbers: Vec<Number> = numbers.into_iter().collect();
        numbers.sort_unstable();

        if let Some(pair) = numbers.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(CoreError::Duplicate(pair[0].value()));
        }

        let found = numbers.len();
        let array: [Number; SET_SIZE] = numbers
            .try_into()
            .map_err(|_| CoreError::WrongSize { found })?;
        Ok(Self(array))
    }

    /// Build a set from raw integers, rejecting out-of-range values first.
    pub fn from_values(values: &[u8]) -> Result<Self> {
        let numbers = values
            .iter()
            .map(|value| Number::new(*value))
            .collect::<Result<Vec<_>>>()?;
        Self::new(numbers)
    }

    pub fn numbers(&self) -> &[Number] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Number> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, number: Number) -> bool {
        self.0.binary_search(&number).is_ok()
    }

    pub fn values(&self) -> [u8; SET_SIZE] {
        self.0.map(Number::value)
    }

    /// Numbers present in both sets, ascending.
    pub fn intersection(&self, other: &NumberSet) -> Vec<Number> {
        self.iter().filter(|number| other.contains(*number)).collect()
    }
}

impl TryFrom<Vec<Number>> for NumberSet {
    type Error = CoreError;

    fn try_from(numbers: Vec<Number>) -> Result<Self> {
        NumberSet::new(numbers)
    }
}

impl From<NumberSet> for Vec<Number> {
    fn from(set: NumberSet) -> Self {
        set.0.to_vec()
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, number) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{number}")?;
        }
        Ok(())
    }
}

/// Display colour group of a number, one per block of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Yellow,
    Blue,
    Red,
    Green,
    Purple,
}

impl Band {
    pub fn of(number: Number) -> Self {
        match number.value() {
            ..=10 => Band::Yellow,
            11..=20 => Band::Blue,
            21..=30 => Band::Red,
            31..=40 => Band::Green,
            _ => Band::Purple,
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Band::Yellow => (0xf3, 0x9c, 0x12),
            Band::Blue => (0x34, 0x98, 0xdb),
            Band::Red => (0xe7, 0x4c, 0x3c),
            Band::Green => (0x2e, 0xcc, 0x71),
            Band::Purple => (0x9b, 0x59, 0xb6),
        }
    }
}

/// Binomial coefficient `C(n, k)`; exact for the ranges used here.
pub fn combinations(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1_u64, |acc, i| acc * (n - i) / (i + 1))
}
