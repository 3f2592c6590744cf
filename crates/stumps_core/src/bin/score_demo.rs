use serde_json::json;
use stumps_core::{score_ball_json, scoreboard_json, start_innings_json};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏏 Scoring a demo innings through the JSON bridge...");

    let start = json!({
        "schema_version": 1,
        "batting_team": {
            "name": "SSS",
            "players": [
                "Ajay Kumar", "Sanjay", "Rahul", "Mani", "Vijay", "Kavin",
                "Ramesh", "Kumar", "Gowtham", "Arun", "Pradeep"
            ]
        },
        "bowling_team": {
            "name": "TCC",
            "players": [
                "Manoj", "Suresh", "Ravi", "Naveen", "Sathish", "Karthik",
                "Raghu", "Balaji", "Imran", "Rohit", "Vasanth"
            ]
        }
    });
    start_innings_json(&start.to_string())?;
    println!("✅ Innings started: SSS batting, Manoj opening the bowling");

    // One over plus change: 4 1 0 W NB 6 2 | new bowler | 1
    let balls = vec![
        json!({"schema_version": 1, "command": "legal_delivery", "runs": 4}),
        json!({"schema_version": 1, "command": "legal_delivery", "runs": 1}),
        json!({"schema_version": 1, "command": "legal_delivery", "runs": 0}),
        json!({"schema_version": 1, "command": "legal_delivery", "runs": 0, "is_wicket": true}),
        json!({"schema_version": 1, "command": "extra", "kind": "NB"}),
        json!({"schema_version": 1, "command": "legal_delivery", "runs": 6}),
        json!({"schema_version": 1, "command": "legal_delivery", "runs": 2}),
        json!({"schema_version": 1, "command": "select_bowler", "bowler": "Suresh"}),
        json!({"schema_version": 1, "command": "legal_delivery", "runs": 1}),
    ];

    for request in &balls {
        let response = score_ball_json(&request.to_string())?;
        let board: serde_json::Value = serde_json::from_str(&response)?;
        let s = &board["scoreboard"];
        println!(
            "  {}/{} in {} ov (RR {}) | {} {}* ({}) | {} bowling",
            s["runs"],
            s["wickets"],
            s["overs"].as_str().unwrap_or("?"),
            s["run_rate"],
            s["striker"]["name"].as_str().unwrap_or("?"),
            s["striker"]["runs_scored"],
            s["striker"]["balls_faced"],
            s["bowler_name"].as_str().unwrap_or("?"),
        );
    }

    let board: serde_json::Value = serde_json::from_str(&scoreboard_json()?)?;
    let s = &board["scoreboard"];
    if s["runs"] != json!(15) || s["wickets"] != json!(1) || s["balls"] != json!(7) {
        return Err(format!(
            "unexpected final score: {}/{} off {} balls",
            s["runs"], s["wickets"], s["balls"]
        )
        .into());
    }
    println!("✅ Final: 15/1 off 7 legal balls, one no-ball extra");

    let fow = &s["fall_of_wickets"][0];
    println!(
        "✅ Fall of wickets: {}. {} — {} ({})",
        fow["wicket_number"],
        fow["batsman"].as_str().unwrap_or("?"),
        fow["score"],
        fow["over"].as_str().unwrap_or("?"),
    );

    // Undo the last single and re-check.
    let undo = json!({"schema_version": 1, "command": "undo"});
    let response = score_ball_json(&undo.to_string())?;
    let board: serde_json::Value = serde_json::from_str(&response)?;
    let s = &board["scoreboard"];
    if s["runs"] != json!(14) || s["balls"] != json!(6) {
        return Err(format!("undo did not revert: {}/{}", s["runs"], s["balls"]).into());
    }
    println!("✅ Undo reverted the last single: {}/{} in {} ov", s["runs"], s["wickets"], s["overs"]);

    println!("\n🎉 Demo innings complete");
    Ok(())
}
