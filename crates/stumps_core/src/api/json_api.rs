//! JSON bridge for UI integration.
//!
//! The scoring screen talks to the engine through string-in/string-out
//! JSON functions so the frontend never links against engine types.
//! Error strings are `CODE: message`, with stable codes from
//! [`crate::error::error_codes`].
//!
//! One innings session is live at a time, held behind a mutex; locking
//! per command serializes scorers, so the append-to-timeline-then-derive
//! sequence is never interleaved.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::engine::{InningsEngine, InningsPlan};
use crate::error::ScoreError;
use crate::models::{ExtraKind, Scoreboard, Team};
use crate::SCHEMA_VERSION;

static LIVE_INNINGS: Lazy<Mutex<Option<InningsEngine>>> = Lazy::new(|| Mutex::new(None));

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn bridge_err(err: &ScoreError) -> String {
    err_code(err.code(), err)
}

#[derive(Debug, Deserialize)]
pub struct TeamData {
    pub name: String,
    pub players: Vec<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl From<TeamData> for Team {
    fn from(data: TeamData) -> Self {
        Team { name: data.name, players: data.players, logo: data.logo }
    }
}

/// Session-start request. Openers and the opening bowler default to the
/// top of each roster when omitted.
#[derive(Debug, Deserialize)]
pub struct InningsRequest {
    pub schema_version: u8,
    pub batting_team: TeamData,
    pub bowling_team: TeamData,
    #[serde(default)]
    pub striker: Option<String>,
    #[serde(default)]
    pub non_striker: Option<String>,
    #[serde(default)]
    pub opening_bowler: Option<String>,
}

/// Command envelope applied to the live session.
#[derive(Debug, Deserialize)]
pub struct BallRequest {
    pub schema_version: u8,
    #[serde(flatten)]
    pub command: BallCommand,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum BallCommand {
    LegalDelivery {
        runs: u32,
        #[serde(default)]
        is_wicket: bool,
    },
    Extra {
        kind: ExtraKind,
        /// Defaults per kind (one run) when omitted.
        #[serde(default)]
        runs: Option<u32>,
    },
    Undo,
    SelectBowler {
        bowler: String,
    },
}

#[derive(Debug, Serialize)]
pub struct InningsResponse {
    pub schema_version: u8,
    pub scoreboard: Scoreboard,
}

fn check_schema_version(found: u8) -> Result<(), String> {
    if found != SCHEMA_VERSION {
        return Err(bridge_err(&ScoreError::SchemaVersionMismatch {
            found,
            expected: SCHEMA_VERSION,
        }));
    }
    Ok(())
}

fn render_response(engine: &InningsEngine) -> Result<String, String> {
    let response =
        InningsResponse { schema_version: SCHEMA_VERSION, scoreboard: engine.scoreboard() };
    serde_json::to_string(&response).map_err(|e| bridge_err(&ScoreError::from(e)))
}

/// Start a new scoring session, replacing any previous one. Returns the
/// opening scoreboard.
pub fn start_innings_json(request_json: &str) -> Result<String, String> {
    let request: InningsRequest = serde_json::from_str(request_json)
        .map_err(|e| bridge_err(&ScoreError::Deserialization(e.to_string())))?;
    check_schema_version(request.schema_version)?;

    let mut plan = InningsPlan::new(request.batting_team.into(), request.bowling_team.into());
    plan.striker = request.striker;
    plan.non_striker = request.non_striker;
    plan.opening_bowler = request.opening_bowler;

    let engine = InningsEngine::new(plan).map_err(|e| bridge_err(&e))?;
    let response = render_response(&engine)?;

    let mut session = LIVE_INNINGS.lock().expect("LIVE_INNINGS lock poisoned");
    *session = Some(engine);
    Ok(response)
}

/// Apply one scoring command to the live session and return the
/// post-command scoreboard. An `undo` on an empty timeline is a no-op
/// and still returns the (unchanged) scoreboard.
pub fn score_ball_json(request_json: &str) -> Result<String, String> {
    let request: BallRequest = serde_json::from_str(request_json)
        .map_err(|e| bridge_err(&ScoreError::Deserialization(e.to_string())))?;
    check_schema_version(request.schema_version)?;

    let mut session = LIVE_INNINGS.lock().expect("LIVE_INNINGS lock poisoned");
    let engine = session
        .as_mut()
        .ok_or_else(|| bridge_err(&ScoreError::NoActiveInnings))?;

    match request.command {
        BallCommand::LegalDelivery { runs, is_wicket } => {
            engine.record_legal_delivery(runs, is_wicket).map_err(|e| bridge_err(&e))?;
        }
        BallCommand::Extra { kind, runs } => {
            let runs = runs.unwrap_or_else(|| kind.default_runs());
            engine.record_extra(kind, runs).map_err(|e| bridge_err(&e))?;
        }
        BallCommand::Undo => {
            engine.undo_last();
        }
        BallCommand::SelectBowler { bowler } => {
            engine.select_bowler(&bowler).map_err(|e| bridge_err(&e))?;
        }
    }

    render_response(engine)
}

/// Read-only scoreboard projection of the live session.
pub fn scoreboard_json() -> Result<String, String> {
    let session = LIVE_INNINGS.lock().expect("LIVE_INNINGS lock poisoned");
    let engine = session
        .as_ref()
        .ok_or_else(|| bridge_err(&ScoreError::NoActiveInnings))?;
    render_response(engine)
}

/// Drop the live session, if any. The UI calls this when leaving the
/// scoring screen without starting a new innings.
pub fn end_innings() {
    let mut session = LIVE_INNINGS.lock().expect("LIVE_INNINGS lock poisoned");
    *session = None;
}

/// Bridge tests share the global session; they serialize on this guard
/// so parallel test threads cannot swap sessions under each other.
#[cfg(test)]
pub(crate) static BRIDGE_TEST_GUARD: Mutex<()> = Mutex::new(());
