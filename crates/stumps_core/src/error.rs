use thiserror::Error;

/// Stable error code strings surfaced through the JSON bridge.
pub mod error_codes {
    pub const INVALID_RUNS: &str = "INVALID_RUNS";
    pub const RUNS_ON_WICKET: &str = "RUNS_ON_WICKET";
    pub const INVALID_EXTRA_RUNS: &str = "INVALID_EXTRA_RUNS";
    pub const UNKNOWN_PLAYER: &str = "UNKNOWN_PLAYER";
    pub const INVALID_TEAM: &str = "INVALID_TEAM";
    pub const INNINGS_OVER: &str = "INNINGS_OVER";
    pub const NO_ACTIVE_INNINGS: &str = "NO_ACTIVE_INNINGS";
    pub const SCHEMA_VERSION_MISMATCH: &str = "SCHEMA_VERSION_MISMATCH";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const SERIALIZATION: &str = "SERIALIZATION";
}

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid runs for a legal delivery: {runs} (allowed: 0, 1, 2, 3, 4, 6)")]
    InvalidRuns { runs: u32 },

    #[error("runs cannot be credited to the batsman on a dismissal ball (got {runs})")]
    RunsOnWicket { runs: u32 },

    #[error("an extra must award at least one run, got {runs}")]
    InvalidExtraRuns { runs: u32 },

    #[error("player not in roster: {name}")]
    UnknownPlayer { name: String },

    #[error("invalid team {team}: {reason}")]
    InvalidTeam { team: String, reason: String },

    #[error("innings is over; only undo is accepted")]
    InningsOver,

    #[error("no active innings session")]
    NoActiveInnings,

    #[error("unsupported schema version: found {found}, expected {expected}")]
    SchemaVersionMismatch { found: u8, expected: u8 },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl ScoreError {
    /// Machine-readable code used as the prefix of bridge error strings.
    pub fn code(&self) -> &'static str {
        match self {
            ScoreError::InvalidRuns { .. } => error_codes::INVALID_RUNS,
            ScoreError::RunsOnWicket { .. } => error_codes::RUNS_ON_WICKET,
            ScoreError::InvalidExtraRuns { .. } => error_codes::INVALID_EXTRA_RUNS,
            ScoreError::UnknownPlayer { .. } => error_codes::UNKNOWN_PLAYER,
            ScoreError::InvalidTeam { .. } => error_codes::INVALID_TEAM,
            ScoreError::InningsOver => error_codes::INNINGS_OVER,
            ScoreError::NoActiveInnings => error_codes::NO_ACTIVE_INNINGS,
            ScoreError::SchemaVersionMismatch { .. } => error_codes::SCHEMA_VERSION_MISMATCH,
            ScoreError::Serialization(_) => error_codes::SERIALIZATION,
            ScoreError::Deserialization(_) => error_codes::BAD_REQUEST,
        }
    }
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            ScoreError::Deserialization(err.to_string())
        } else {
            ScoreError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
