//! # stumps_core - Live Cricket Innings Scoring Engine
//!
//! This library powers the live match-scoring screen: it consumes
//! discrete ball events and maintains consistent derived statistics,
//! with a JSON API for easy integration with the mobile UI.
//!
//! ## Features
//! - Ball-by-ball scoring: runs, wickets, overs, run rate
//! - Batsman, bowler, and partnership figures kept in lockstep per ball
//! - Fall-of-wickets record and append-only event timeline
//! - Undo of the last event, driven by the timeline as system of record
//! - JSON API for easy integration

pub mod api;
pub mod engine;
pub mod error;
pub mod models;

// Re-export the bridge surface
pub use api::{
    end_innings, score_ball_json, scoreboard_json, start_innings_json, BallCommand, BallRequest,
    InningsRequest, InningsResponse, TeamData,
};

// Re-export engine and model types
pub use engine::{InningsEngine, InningsPlan};
pub use error::{Result, ScoreError};
pub use models::{
    BatsmanCard, BowlerFigures, ExtraKind, FallOfWicket, InningsState, Scoreboard, Team,
    TimelineEvent,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::json_api::BRIDGE_TEST_GUARD;
    use serde_json::json;

    fn guard() -> std::sync::MutexGuard<'static, ()> {
        BRIDGE_TEST_GUARD.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn full_rosters_request() -> String {
        json!({
            "schema_version": 1,
            "batting_team": {
                "name": "SSS",
                "logo": "https://picsum.photos/80/80?random=21",
                "players": [
                    "Ajay Kumar", "Sanjay", "Rahul", "Mani", "Vijay", "Kavin",
                    "Ramesh", "Kumar", "Gowtham", "Arun", "Pradeep"
                ]
            },
            "bowling_team": {
                "name": "TCC",
                "logo": "https://picsum.photos/80/80?random=22",
                "players": [
                    "Manoj", "Suresh", "Ravi", "Naveen", "Sathish", "Karthik",
                    "Raghu", "Balaji", "Imran", "Rohit", "Vasanth"
                ]
            }
        })
        .to_string()
    }

    fn ball(body: serde_json::Value) -> serde_json::Value {
        let mut request = body;
        request["schema_version"] = json!(1);
        let response = score_ball_json(&request.to_string()).expect("command should apply");
        serde_json::from_str(&response).unwrap()
    }

    #[test]
    fn test_scoring_session_end_to_end() {
        let _guard = guard();
        start_innings_json(&full_rosters_request()).unwrap();

        // Boundary first ball: no strike rotation on even runs.
        let board = ball(json!({"command": "legal_delivery", "runs": 4}));
        assert_eq!(board["scoreboard"]["runs"], 4);
        assert_eq!(board["scoreboard"]["overs"], "0.1");
        assert_eq!(board["scoreboard"]["striker"]["name"], "Ajay Kumar");
        assert_eq!(board["scoreboard"]["striker"]["runs_scored"], 4);
        assert_eq!(board["scoreboard"]["striker"]["balls_faced"], 1);
        assert_eq!(board["scoreboard"]["run_rate"], 24.0);

        // Single rotates the strike.
        let board = ball(json!({"command": "legal_delivery", "runs": 1}));
        assert_eq!(board["scoreboard"]["runs"], 5);
        assert_eq!(board["scoreboard"]["balls"], 2);
        assert_eq!(board["scoreboard"]["striker"]["name"], "Sanjay");

        // Wide: runs total moves, legal balls do not.
        let board = ball(json!({"command": "extra", "kind": "WD"}));
        assert_eq!(board["scoreboard"]["runs"], 6);
        assert_eq!(board["scoreboard"]["balls"], 2);

        // Undo the wide.
        let board = ball(json!({"command": "undo"}));
        assert_eq!(board["scoreboard"]["runs"], 5);
        assert_eq!(board["scoreboard"]["balls"], 2);
        assert_eq!(board["scoreboard"]["partnership_runs"], 5);

        // Scoreboard read matches the last command response.
        let read: serde_json::Value =
            serde_json::from_str(&scoreboard_json().unwrap()).unwrap();
        assert_eq!(read["scoreboard"]["runs"], 5);
        assert_eq!(read["scoreboard"]["timeline"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_wicket_fall_via_bridge() {
        let _guard = guard();
        start_innings_json(&full_rosters_request()).unwrap();

        for _ in 0..3 {
            ball(json!({"command": "legal_delivery", "runs": 4}));
        }
        let board = ball(json!({"command": "legal_delivery", "runs": 0, "is_wicket": true}));

        let scoreboard = &board["scoreboard"];
        assert_eq!(scoreboard["wickets"], 1);
        assert_eq!(scoreboard["partnership_runs"], 0);
        assert_eq!(scoreboard["striker"]["name"], "Rahul");

        let fow = scoreboard["fall_of_wickets"].as_array().unwrap();
        assert_eq!(fow.len(), 1);
        assert_eq!(fow[0]["score"], 12);
        assert_eq!(fow[0]["batsman"], "Ajay Kumar");
        assert_eq!(fow[0]["over"], "0.4");

        assert_eq!(scoreboard["bowler"]["wickets_taken"], 1);

        let timeline = scoreboard["timeline"].as_array().unwrap();
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline[3]["type"], "legal_delivery");
        assert_eq!(timeline[3]["is_wicket"], true);
    }

    #[test]
    fn test_timeline_reconstructs_score() {
        // The timeline is the system of record: summing its entries must
        // reproduce the headline numbers.
        let _guard = guard();
        start_innings_json(&full_rosters_request()).unwrap();

        ball(json!({"command": "legal_delivery", "runs": 2}));
        ball(json!({"command": "extra", "kind": "NB", "runs": 2}));
        ball(json!({"command": "legal_delivery", "runs": 6}));
        ball(json!({"command": "extra", "kind": "LB"}));
        let board = ball(json!({"command": "legal_delivery", "runs": 0, "is_wicket": true}));

        let scoreboard = &board["scoreboard"];
        let timeline = scoreboard["timeline"].as_array().unwrap();

        let credited: u64 =
            timeline.iter().map(|e| e["runs"].as_u64().unwrap()).sum();
        assert_eq!(scoreboard["runs"].as_u64().unwrap(), credited);

        let legal = timeline.iter().filter(|e| e["type"] == "legal_delivery").count();
        assert_eq!(scoreboard["balls"].as_u64().unwrap() as usize, legal);

        let wickets = timeline
            .iter()
            .filter(|e| e["is_wicket"].as_bool().unwrap_or(false))
            .count();
        assert_eq!(scoreboard["wickets"].as_u64().unwrap() as usize, wickets);
        assert_eq!(
            scoreboard["fall_of_wickets"].as_array().unwrap().len(),
            wickets,
            "fall-of-wickets list length always equals wickets"
        );
    }

    #[test]
    fn test_all_out_reported_via_bridge() {
        let _guard = guard();
        start_innings_json(&full_rosters_request()).unwrap();

        let mut last = json!(null);
        for _ in 0..10 {
            last = ball(json!({"command": "legal_delivery", "runs": 0, "is_wicket": true}));
        }
        assert_eq!(last["scoreboard"]["wickets"], 10);
        assert_eq!(last["scoreboard"]["state"], "all_out");

        let err = score_ball_json(
            &json!({"schema_version": 1, "command": "legal_delivery", "runs": 1}).to_string(),
        )
        .unwrap_err();
        assert!(err.starts_with(error::error_codes::INNINGS_OVER), "got: {}", err);

        // Undo reopens the innings.
        let board = ball(json!({"command": "undo"}));
        assert_eq!(board["scoreboard"]["wickets"], 9);
        assert_eq!(board["scoreboard"]["state"], "in_progress");
    }
}
