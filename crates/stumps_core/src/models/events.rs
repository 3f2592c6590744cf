use serde::{Deserialize, Serialize};

/// Extra delivery kinds, serialized with the scorer's shorthand codes.
///
/// Wides and no-balls do not count toward the over; byes and leg-byes in
/// this model are also excluded from the legal-ball count (the delivery
/// itself is tracked purely as an awarded-runs event).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum ExtraKind {
    #[serde(rename = "NB")]
    NoBall,
    #[serde(rename = "WD")]
    Wide,
    #[serde(rename = "BYE")]
    Bye,
    #[serde(rename = "LB")]
    LegBye,
}

impl ExtraKind {
    /// Shorthand code shown on scoring buttons and timeline chips.
    pub fn code(&self) -> &'static str {
        match self {
            ExtraKind::NoBall => "NB",
            ExtraKind::Wide => "WD",
            ExtraKind::Bye => "BYE",
            ExtraKind::LegBye => "LB",
        }
    }

    /// Runs awarded when the scorer taps the extra button without
    /// entering an amount.
    pub fn default_runs(&self) -> u32 {
        1
    }

    /// Byes and leg-byes are physically run by the batsmen, so an odd
    /// count swaps the strike. Wides and no-balls never rotate here.
    pub fn rotates_strike(&self) -> bool {
        matches!(self, ExtraKind::Bye | ExtraKind::LegBye)
    }
}

/// One entry of the ball-by-ball timeline.
///
/// The timeline is the system of record: it is append-only, chronological
/// by vec order, and undo always reverses the last entry. Every derived
/// figure on the scoreboard must stay recomputable from this log alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineEvent {
    /// A delivery that counts toward the over.
    LegalDelivery {
        runs: u32,
        is_wicket: bool,
        /// Batsman on strike when the ball was bowled.
        batsman: String,
        bowler: String,
    },
    /// Runs awarded without a legal-ball increment.
    Extra { kind: ExtraKind, runs: u32, bowler: String },
}

impl TimelineEvent {
    /// Runs this entry contributed to the innings total.
    pub fn credited_runs(&self) -> u32 {
        match self {
            TimelineEvent::LegalDelivery { runs, .. } => *runs,
            TimelineEvent::Extra { runs, .. } => *runs,
        }
    }

    pub fn is_legal_delivery(&self) -> bool {
        matches!(self, TimelineEvent::LegalDelivery { .. })
    }

    /// Short display label for timeline and last-over chips.
    pub fn label(&self) -> String {
        match self {
            TimelineEvent::LegalDelivery { is_wicket: true, .. } => "W".to_string(),
            TimelineEvent::LegalDelivery { runs, .. } => runs.to_string(),
            TimelineEvent::Extra { kind, runs, .. } => format!("{} {}", kind.code(), runs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_extra_kind_codes_round_trip() {
        for kind in ExtraKind::iter() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
            let back: ExtraKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_only_byes_rotate_strike() {
        assert!(ExtraKind::Bye.rotates_strike());
        assert!(ExtraKind::LegBye.rotates_strike());
        assert!(!ExtraKind::Wide.rotates_strike());
        assert!(!ExtraKind::NoBall.rotates_strike());
    }

    #[test]
    fn test_labels() {
        let four = TimelineEvent::LegalDelivery {
            runs: 4,
            is_wicket: false,
            batsman: "Ajay Kumar".to_string(),
            bowler: "Manoj".to_string(),
        };
        assert_eq!(four.label(), "4");

        let wicket = TimelineEvent::LegalDelivery {
            runs: 0,
            is_wicket: true,
            batsman: "Ajay Kumar".to_string(),
            bowler: "Manoj".to_string(),
        };
        assert_eq!(wicket.label(), "W");

        let wide = TimelineEvent::Extra { kind: ExtraKind::Wide, runs: 1, bowler: "Manoj".to_string() };
        assert_eq!(wide.label(), "WD 1");
    }

    #[test]
    fn test_credited_runs() {
        let bye = TimelineEvent::Extra { kind: ExtraKind::Bye, runs: 3, bowler: "Manoj".to_string() };
        assert_eq!(bye.credited_runs(), 3);
        assert!(!bye.is_legal_delivery());
    }
}
