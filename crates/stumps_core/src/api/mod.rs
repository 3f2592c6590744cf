pub mod json_api;

pub use json_api::{
    end_innings, score_ball_json, scoreboard_json, start_innings_json, BallCommand, BallRequest,
    InningsRequest, InningsResponse, TeamData,
};
