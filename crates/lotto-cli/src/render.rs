use crossterm::style::{Color, Stylize};

use lotto_core::{Favorites, Number, NumberSet, Theme};
use lotto_eval::{CheckResult, OddsEstimate};

use crate::store::CheckerInputs;

/// Clipboard text for a batch: one `Set i: n1, n2, …` line per ticket.
pub fn clipboard_text(sets: &[NumberSet]) -> String {
    sets.iter()
        .enumerate()
        .map(|(idx, set)| format!("Set {}: {set}", idx + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Terminal output styled for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    theme: Theme,
    plain: bool,
}

impl Renderer {
    pub fn new(theme: Theme, plain: bool) -> Self {
        Self { theme, plain }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    fn text_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::Rgb { r: 0x2c, g: 0x3e, b: 0x50 },
            Theme::Dark => Color::Rgb { r: 0xec, g: 0xf0, b: 0xf1 },
        }
    }

    fn text(&self, value: &str) -> String {
        if self.plain {
            value.to_string()
        } else {
            value.with(self.text_color()).to_string()
        }
    }

    pub fn ball(&self, number: Number) -> String {
        let label = format!("{:>2}", number.value());
        if self.plain {
            return label;
        }
        let (r, g, b) = number.band().rgb();
        format!(" {label} ")
            .with(Color::White)
            .on(Color::Rgb { r, g, b })
            .bold()
            .to_string()
    }

    pub fn balls(&self, set: &NumberSet) -> String {
        set.iter()
            .map(|number| self.ball(number))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn sets(&self, sets: &[NumberSet]) -> String {
        sets.iter()
            .enumerate()
            .map(|(idx, set)| {
                format!("{} {}", self.text(&format!("Set {}:", idx + 1)), self.balls(set))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn favorites(&self, favorites: &Favorites) -> String {
        if favorites.is_empty() {
            return self.text("No favorites saved yet.");
        }
        favorites
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let note = if entry.note.is_empty() {
                    String::new()
                } else {
                    format!(" - {}", entry.note)
                };
                format!(
                    "{} {}{}",
                    self.text(&format!("{:>2}. [{}]", idx + 1, entry.saved_at)),
                    self.balls(&entry.numbers),
                    self.text(&note)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn check(&self, inputs: &CheckerInputs, result: &CheckResult) -> String {
        let matched = result
            .matched
            .iter()
            .map(Number::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let lines = [
            format!(
                "{} {} {} {}",
                self.text("Winning:"),
                self.balls(&inputs.winning),
                self.text("+"),
                self.ball(inputs.bonus)
            ),
            format!("{} {}", self.text("Mine:   "), self.balls(&inputs.mine)),
            self.text(&format!(
                "Matched {} ({}){}: {}",
                result.match_count,
                if matched.is_empty() { "-" } else { matched.as_str() },
                if result.bonus_match { " + bonus" } else { "" },
                result.grade
            )),
        ];
        lines.join("\n")
    }

    pub fn odds(&self, odds: &OddsEstimate) -> String {
        let lines = [
            format!("Tickets: {}", odds.tickets),
            format!(
                "1st place: {:.8}% (1 in {:.0})",
                odds.first_place_chance * 100.0,
                odds.one_in_first()
            ),
            format!(
                "Any prize: {:.2}% (1 in {:.1})",
                odds.any_prize_chance * 100.0,
                odds.one_in_any()
            ),
        ];
        lines
            .iter()
            .map(|line| self.text(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn message(&self, value: &str) -> String {
        self.text(value)
    }
}

#[cfg(test)]
mod tests {
    use lotto_core::FavoriteEntry;

    use super::*;

    fn ticket(values: &[u8]) -> NumberSet {
        NumberSet::from_values(values).expect("valid set")
    }

    #[test]
    fn clipboard_text_lists_each_set() {
        let sets = [ticket(&[6, 5, 4, 3, 2, 1]), ticket(&[10, 20, 30, 40, 41, 45])];
        assert_eq!(
            clipboard_text(&sets),
            "Set 1: 1, 2, 3, 4, 5, 6\nSet 2: 10, 20, 30, 40, 41, 45"
        );
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let renderer = Renderer::new(Theme::Dark, true);
        let line = renderer.sets(&[ticket(&[1, 2, 3, 4, 5, 45])]);
        assert_eq!(line, "Set 1:  1  2  3  4  5 45");
        assert!(!line.contains('\u{1b}'));
    }

    #[test]
    fn styled_balls_use_band_colours() {
        let renderer = Renderer::new(Theme::Light, false);
        let ball = renderer.ball(Number::new(45).expect("valid number"));
        assert!(ball.contains('\u{1b}'));
        assert!(ball.contains("45"));
    }

    #[test]
    fn favorites_are_numbered_from_one() {
        let mut favorites = Favorites::new();
        favorites.save(FavoriteEntry {
            numbers: ticket(&[1, 2, 3, 4, 5, 6]),
            note: "first".to_string(),
            saved_at: "2026-10-19".to_string(),
        });
        let listing = Renderer::new(Theme::Light, true).favorites(&favorites);
        assert_eq!(listing, " 1. [2026-10-19]  1  2  3  4  5  6 - first");
    }
}
