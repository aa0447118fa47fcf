//! Core contracts for the lotto picker.
//!
//! This crate defines the number model, include/exclude constraints and the
//! persisted favorites/theme shapes shared by the generator, the evaluator and
//! the CLI.

pub mod constraints;
pub mod error;
pub mod favorites;
pub mod number;
pub mod theme;

pub use constraints::{Constraints, ConstraintViolation};
pub use error::{CoreError, Result};
pub use favorites::{FAVORITES_LIMIT, FavoriteEntry, Favorites};
pub use number::{
    Band, COMBINATIONS, MAX_NUMBER, MIN_NUMBER, Number, NumberSet, SET_SIZE, combinations,
};
pub use theme::Theme;
