use serde::{Deserialize, Serialize};

use super::events::TimelineEvent;
use crate::engine::overs::format_overs;

/// Live figures for one of the two batting slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatsmanCard {
    pub name: String,
    pub runs_scored: u32,
    pub balls_faced: u32,
    pub is_out: bool,
}

impl BatsmanCard {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), runs_scored: 0, balls_faced: 0, is_out: false }
    }
}

/// Accumulated figures for one bowler. Created lazily on first
/// reference, never removed for the life of the innings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BowlerFigures {
    pub balls_bowled: u32,
    pub runs_conceded: u32,
    pub wickets_taken: u32,
}

impl BowlerFigures {
    /// Overs label in `O.B` form, e.g. `"3.2"` after 20 balls.
    pub fn overs(&self) -> String {
        format_overs(self.balls_bowled)
    }
}

/// Immutable record appended when a wicket falls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FallOfWicket {
    pub wicket_number: u8,
    /// Innings total at the fall, including the dismissal ball.
    pub score: u32,
    pub batsman: String,
    pub over: String,
}

/// Innings lifecycle. `AllOut` is terminal for scoring commands; undo can
/// still back out of it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InningsState {
    InProgress,
    AllOut,
}

/// Full read projection the UI renders from. Built in one call so every
/// figure reflects the same post-command state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    pub batting_team: String,
    pub bowling_team: String,
    pub runs: u32,
    pub wickets: u8,
    /// Count of legal deliveries bowled (extras excluded).
    pub balls: u32,
    pub overs: String,
    pub run_rate: f64,
    pub striker: BatsmanCard,
    pub non_striker: BatsmanCard,
    pub bowler_name: String,
    pub bowler: BowlerFigures,
    pub partnership_runs: u32,
    /// Display labels of up to the last six timeline entries, oldest first.
    pub last_over: Vec<String>,
    pub fall_of_wickets: Vec<FallOfWicket>,
    pub timeline: Vec<TimelineEvent>,
    pub state: InningsState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batsman_card_starts_fresh() {
        let card = BatsmanCard::new("Ajay Kumar");
        assert_eq!(card.runs_scored, 0);
        assert_eq!(card.balls_faced, 0);
        assert!(!card.is_out);
    }

    #[test]
    fn test_bowler_overs_label() {
        let figures = BowlerFigures { balls_bowled: 20, runs_conceded: 31, wickets_taken: 2 };
        assert_eq!(figures.overs(), "3.2");
        assert_eq!(BowlerFigures::default().overs(), "0.0");
    }

    #[test]
    fn test_innings_state_serde_names() {
        let json = serde_json::to_string(&InningsState::AllOut).unwrap();
        assert_eq!(json, "\"all_out\"");
        let json = serde_json::to_string(&InningsState::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
