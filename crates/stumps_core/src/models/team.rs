use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A side taking part in the innings, supplied by the caller at session
/// start. `players` is the roster in batting/bowling order; names double
/// as player identities, so they must be unique within a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub players: Vec<String>,
    /// Opaque asset reference the UI renders next to the team name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<String>) -> Self {
        Self { name: name.into(), players, logo: None }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("team name must not be empty".to_string());
        }

        // Two openers are installed up front, so anything shorter than a
        // pair cannot start an innings.
        if self.players.len() < 2 {
            return Err(format!(
                "team must have at least 2 players, found {}",
                self.players.len()
            ));
        }

        let mut seen = HashSet::new();
        for player in &self.players {
            if player.trim().is_empty() {
                return Err("player names must not be empty".to_string());
            }
            if !seen.insert(player.as_str()) {
                return Err(format!("duplicate player name: {}", player));
            }
        }

        Ok(())
    }

    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }
}
