//! Over arithmetic shared by the innings engine and the scoreboard
//! projections. An over is six legal deliveries; wides and no-balls do
//! not advance the count.

/// Format a legal-ball count as the familiar `O.B` scoreboard label.
pub fn format_overs(legal_balls: u32) -> String {
    format!("{}.{}", legal_balls / 6, legal_balls % 6)
}

/// Runs per over, with balls counted as fractional overs (`balls / 6`).
/// Zero before the first legal delivery, rounded to two decimals.
pub fn run_rate(runs: u32, legal_balls: u32) -> f64 {
    if legal_balls == 0 {
        return 0.0;
    }
    let overs = legal_balls as f64 / 6.0;
    (runs as f64 / overs * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_overs() {
        assert_eq!(format_overs(0), "0.0");
        assert_eq!(format_overs(1), "0.1");
        assert_eq!(format_overs(6), "1.0");
        assert_eq!(format_overs(11), "1.5");
        assert_eq!(format_overs(120), "20.0");
    }

    #[test]
    fn test_run_rate_zero_before_first_ball() {
        assert_eq!(run_rate(0, 0), 0.0);
        assert_eq!(run_rate(5, 0), 0.0);
    }

    #[test]
    fn test_run_rate_fractional_overs() {
        // 4 runs off 1 ball = 24 runs per over.
        assert_eq!(run_rate(4, 1), 24.0);
        // 36 off a full over.
        assert_eq!(run_rate(36, 6), 36.0);
        // 10 off 7 balls = 10 / (7/6) = 8.571... -> 8.57
        assert_eq!(run_rate(10, 7), 8.57);
    }
}
