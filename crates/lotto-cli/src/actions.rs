use thiserror::Error;
use tracing::{info, warn};

use lotto_core::{ConstraintViolation, CoreError, FavoriteEntry, Favorites, Number, NumberSet, Theme};
use lotto_eval::{CheckError, CheckResult, OddsError, OddsEstimate, check_ticket};
use lotto_generate::{GenerateOptions, GenerationEngine, GenerationError, GenerationRequest};

use crate::render::clipboard_text;
use crate::store::{CheckerInputs, KeyValueStore, LastResults, LottoState, StoreError};
use crate::workspace::AppSettings;

/// Failures of a single user action; none of them leave state half-written.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{0}")]
    Generation(#[from] GenerationError),
    #[error("{0}")]
    Check(#[from] CheckError),
    #[error("{0}")]
    Odds(#[from] OddsError),
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
    #[error("nothing generated yet; run `lotto generate` first")]
    NothingGenerated,
    #[error("missing {0}; pass it or check once with all inputs")]
    MissingInput(&'static str),
}

impl ActionError {
    /// Whether the action failed because of what the user asked for.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, ActionError::Store(_))
    }
}

impl From<ConstraintViolation> for ActionError {
    fn from(err: ConstraintViolation) -> Self {
        ActionError::Generation(GenerationError::Constraints(err))
    }
}

pub type ActionResult<T> = Result<T, ActionError>;

/// Raw generate input as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct GenerateInput {
    pub include: Vec<u8>,
    pub exclude: Vec<u8>,
    pub sets: Option<u8>,
    pub seed: Option<u64>,
}

/// Raw checker input; missing fields fall back to the saved inputs.
#[derive(Debug, Clone, Default)]
pub struct CheckInput {
    pub winning: Option<Vec<u8>>,
    pub bonus: Option<u8>,
    pub mine: Option<Vec<u8>>,
}

/// The user-facing actions, bound to a persisted state.
pub struct App<S> {
    state: LottoState<S>,
    settings: AppSettings,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(state: LottoState<S>, settings: AppSettings) -> Self {
        Self { state, settings }
    }

    pub fn generate(&mut self, input: &GenerateInput) -> ActionResult<LastResults> {
        let constraints = lotto_core::Constraints::from_values(&input.include, &input.exclude)?;
        if let Err(violation) = constraints.validate() {
            warn!(event = "generation_rejected", reason = violation.reason(), error = %violation);
            return Err(violation.into());
        }

        let set_count = input.sets.unwrap_or(self.settings.default_set_count);
        let request = GenerationRequest::new(constraints, set_count);
        let engine = GenerationEngine::new(GenerateOptions { seed: input.seed });
        let result = engine.run(&request)?;

        let results = LastResults {
            batch_id: result.report.batch_id,
            generated_at: date_label(),
            sets: result.sets,
        };
        self.state.set_last_results(&results)?;
        info!(event = "sets_generated", batch_id = %results.batch_id, sets = results.sets.len());
        Ok(results)
    }

    pub fn copy_text(&self) -> ActionResult<String> {
        let results = self.last_results()?;
        Ok(clipboard_text(&results.sets))
    }

    /// Save every set of the last batch; returns how many entries were evicted.
    pub fn save_favorites(&mut self, note: &str) -> ActionResult<usize> {
        let results = self.last_results()?;
        let mut favorites = self.state.favorites();
        let evicted = favorites.save_all(&results.sets, note.trim(), &date_label());
        self.state.set_favorites(&favorites)?;
        info!(
            event = "favorites_saved",
            saved = results.sets.len(),
            evicted = evicted.len(),
            total = favorites.len()
        );
        Ok(evicted.len())
    }

    pub fn favorites(&self) -> Favorites {
        self.state.favorites()
    }

    /// Delete the favorite at a 1-based position.
    pub fn delete_favorite(&mut self, position: usize) -> ActionResult<FavoriteEntry> {
        let mut favorites = self.state.favorites();
        let index = position.checked_sub(1).ok_or(CoreError::NoSuchFavorite {
            position,
            len: favorites.len(),
        })?;
        let removed = favorites.delete(index).map_err(|_| CoreError::NoSuchFavorite {
            position,
            len: favorites.len(),
        })?;
        self.state.set_favorites(&favorites)?;
        info!(event = "favorite_deleted", position, remaining = favorites.len());
        Ok(removed)
    }

    pub fn check(&mut self, input: &CheckInput) -> ActionResult<(CheckerInputs, CheckResult)> {
        let saved = self.state.checker_inputs();
        let winning = match (&input.winning, &saved) {
            (Some(values), _) => values.clone(),
            (None, Some(saved)) => saved.winning.values().to_vec(),
            (None, None) => return Err(ActionError::MissingInput("winning numbers")),
        };
        let bonus = match (input.bonus, &saved) {
            (Some(value), _) => value,
            (None, Some(saved)) => saved.bonus.value(),
            (None, None) => return Err(ActionError::MissingInput("bonus number")),
        };
        let mine = match (&input.mine, &saved) {
            (Some(values), _) => values.clone(),
            (None, Some(saved)) => saved.mine.values().to_vec(),
            (None, None) => return Err(ActionError::MissingInput("ticket numbers")),
        };

        let result = check_ticket(&winning, bonus, &mine)?;
        let inputs = CheckerInputs {
            winning: NumberSet::from_values(&winning)?,
            bonus: Number::new(bonus)?,
            mine: NumberSet::from_values(&mine)?,
        };
        self.state.set_checker_inputs(&inputs)?;
        info!(
            event = "ticket_checked",
            match_count = result.match_count,
            bonus_match = result.bonus_match,
            grade = %result.grade
        );
        Ok((inputs, result))
    }

    pub fn reset_checker(&mut self) -> ActionResult<()> {
        self.state.clear_checker_inputs()?;
        info!(event = "checker_reset");
        Ok(())
    }

    pub fn odds(&self, tickets: u32) -> ActionResult<OddsEstimate> {
        Ok(lotto_eval::estimate_odds(tickets)?)
    }

    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    pub fn set_theme(&mut self, theme: Theme) -> ActionResult<Theme> {
        self.state.set_theme(theme)?;
        info!(event = "theme_changed", theme = %theme);
        Ok(theme)
    }

    pub fn toggle_theme(&mut self) -> ActionResult<Theme> {
        let next = self.theme().toggle();
        self.set_theme(next)
    }

    fn last_results(&self) -> ActionResult<LastResults> {
        self.state
            .last_results()
            .filter(|results| !results.sets.is_empty())
            .ok_or(ActionError::NothingGenerated)
    }
}

fn date_label() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use lotto_core::{FAVORITES_LIMIT, SET_SIZE};
    use lotto_eval::Grade;

    use super::*;
    use crate::store::{MemoryStore, StorageKeys};

    fn app() -> App<MemoryStore> {
        App::new(
            LottoState::new(MemoryStore::new(), StorageKeys::default()),
            AppSettings::default(),
        )
    }

    fn generate(app: &mut App<MemoryStore>, sets: u8, seed: u64) -> LastResults {
        app.generate(&GenerateInput {
            sets: Some(sets),
            seed: Some(seed),
            ..GenerateInput::default()
        })
        .expect("generate sets")
    }

    #[test]
    fn generate_uses_default_count_and_persists() {
        let mut app = app();
        let results = app.generate(&GenerateInput::default()).expect("generate");
        assert_eq!(results.sets.len(), 1);
        assert_eq!(results.sets[0].numbers().len(), SET_SIZE);

        let copied = app.copy_text().expect("copy");
        assert_eq!(copied, format!("Set 1: {}", results.sets[0]));
    }

    #[test]
    fn generate_reports_infeasible_constraints_without_writing() {
        let mut app = app();
        let err = app
            .generate(&GenerateInput {
                include: vec![1, 2],
                exclude: vec![2, 3],
                ..GenerateInput::default()
            })
            .expect_err("overlap");
        assert!(err.is_user_error());
        assert!(err.to_string().contains("include/exclude overlap"));
        assert!(matches!(app.copy_text(), Err(ActionError::NothingGenerated)));
    }

    #[test]
    fn generate_rejects_out_of_range_input() {
        let mut app = app();
        let err = app
            .generate(&GenerateInput {
                include: vec![46],
                ..GenerateInput::default()
            })
            .expect_err("out of range");
        assert!(matches!(err, ActionError::Core(CoreError::OutOfRange { value: 46 })));
    }

    #[test]
    fn empty_state_actions_are_reported() {
        let mut app = app();
        assert!(matches!(app.copy_text(), Err(ActionError::NothingGenerated)));
        assert!(matches!(
            app.save_favorites("note"),
            Err(ActionError::NothingGenerated)
        ));
        assert!(app.favorites().is_empty());
    }

    #[test]
    fn repeated_saves_cap_favorites() {
        let mut app = app();
        for seed in 0..5 {
            generate(&mut app, 5, seed);
            app.save_favorites("batch").expect("save");
        }
        let favorites = app.favorites();
        assert_eq!(favorites.len(), FAVORITES_LIMIT);

        let latest = generate(&mut app, 1, 99);
        let evicted = app.save_favorites("  newest  ").expect("save");
        assert_eq!(evicted, 1);
        let favorites = app.favorites();
        assert_eq!(favorites.entries()[0].numbers, latest.sets[0]);
        assert_eq!(favorites.entries()[0].note, "newest");
    }

    #[test]
    fn delete_uses_one_based_positions() {
        let mut app = app();
        let results = generate(&mut app, 2, 7);
        app.save_favorites("").expect("save");

        assert!(matches!(
            app.delete_favorite(0),
            Err(ActionError::Core(CoreError::NoSuchFavorite { .. }))
        ));
        let removed = app.delete_favorite(1).expect("delete first");
        assert_eq!(removed.numbers, results.sets[0]);
        assert_eq!(app.favorites().entries()[0].numbers, results.sets[1]);
        assert!(app.delete_favorite(2).is_err());
    }

    #[test]
    fn check_remembers_inputs_until_reset() {
        let mut app = app();
        let (_, result) = app
            .check(&CheckInput {
                winning: Some(vec![1, 2, 3, 4, 5, 6]),
                bonus: Some(7),
                mine: Some(vec![1, 2, 3, 4, 5, 7]),
            })
            .expect("check");
        assert_eq!(result.grade, Grade::Second);

        let (inputs, result) = app
            .check(&CheckInput {
                mine: Some(vec![1, 2, 3, 4, 5, 8]),
                ..CheckInput::default()
            })
            .expect("check with saved draw");
        assert_eq!(inputs.bonus.value(), 7);
        assert_eq!(result.grade, Grade::Third);

        app.reset_checker().expect("reset");
        assert!(matches!(
            app.check(&CheckInput::default()),
            Err(ActionError::MissingInput(_))
        ));
    }

    #[test]
    fn invalid_check_keeps_previous_inputs() {
        let mut app = app();
        app.check(&CheckInput {
            winning: Some(vec![1, 2, 3, 4, 5, 6]),
            bonus: Some(7),
            mine: Some(vec![1, 2, 3, 4, 5, 6]),
        })
        .expect("check");

        let err = app
            .check(&CheckInput {
                mine: Some(vec![1, 2, 3]),
                ..CheckInput::default()
            })
            .expect_err("short ticket");
        assert!(matches!(err, ActionError::Check(_)));

        let (inputs, _) = app.check(&CheckInput::default()).expect("saved inputs");
        assert_eq!(inputs.mine.values(), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn theme_toggle_persists() {
        let mut app = app();
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.toggle_theme().expect("toggle"), Theme::Dark);
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(app.toggle_theme().expect("toggle"), Theme::Light);
    }

    #[test]
    fn odds_validate_ticket_count() {
        let app = app();
        assert!(app.odds(100).is_ok());
        assert!(matches!(app.odds(0), Err(ActionError::Odds(_))));
    }
}
