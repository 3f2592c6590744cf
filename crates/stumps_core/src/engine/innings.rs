//! Live innings scoring engine.
//!
//! One engine instance owns the whole scoring state for a session: the
//! score line, both batting slots, the per-bowler figures, the current
//! partnership, the fall-of-wickets list, and the ball-by-ball timeline.
//! Every command mutates all of it atomically inside a single handler, so
//! derived values (fall-of-wickets score, overs label) are always read
//! from post-mutation state and can never observe a half-applied ball.
//!
//! The timeline is the system of record. Commands append to it; undo pops
//! the last entry and reverses its effects.

use std::collections::{HashMap, VecDeque};

use super::overs::{format_overs, run_rate};
use crate::error::{Result, ScoreError};
use crate::models::{
    BatsmanCard, BowlerFigures, ExtraKind, FallOfWicket, InningsState, Scoreboard, Team,
    TimelineEvent,
};

/// Run values a batsman can be credited off the bat. Fives exist in the
/// real game but not on this scorer's pad.
const LEGAL_RUN_VALUES: [u32; 6] = [0, 1, 2, 3, 4, 6];

/// Wicket count that ends an innings outright.
const ALL_OUT_WICKETS: u8 = 10;

/// How many timeline entries the last-over widget shows.
const LAST_OVER_WINDOW: usize = 6;

/// Session configuration, injected by the caller at construction.
///
/// Openers and the opening bowler default to the top of each roster when
/// not overridden, matching the scorer's quick-start flow.
#[derive(Debug, Clone)]
pub struct InningsPlan {
    pub batting_team: Team,
    pub bowling_team: Team,
    pub striker: Option<String>,
    pub non_striker: Option<String>,
    pub opening_bowler: Option<String>,
}

impl InningsPlan {
    pub fn new(batting_team: Team, bowling_team: Team) -> Self {
        Self { batting_team, bowling_team, striker: None, non_striker: None, opening_bowler: None }
    }
}

/// The innings scoring engine. See the module docs for the state model.
#[derive(Debug, Clone)]
pub struct InningsEngine {
    batting_team: Team,
    bowling_team: Team,

    runs: u32,
    wickets: u8,
    legal_balls: u32,
    partnership_runs: u32,

    /// Striker at index 0, non-striker at index 1.
    batsmen: [BatsmanCard; 2],
    /// Batting-roster players not yet used, in roster order. Popped once
    /// per dismissal; never refilled (no re-entry).
    remaining_batsmen: VecDeque<String>,

    bowlers: HashMap<String, BowlerFigures>,
    active_bowler: String,

    fall_of_wickets: Vec<FallOfWicket>,
    timeline: Vec<TimelineEvent>,

    state: InningsState,
}

impl InningsEngine {
    pub fn new(plan: InningsPlan) -> Result<Self> {
        let InningsPlan { batting_team, bowling_team, striker, non_striker, opening_bowler } = plan;

        batting_team.validate().map_err(|reason| ScoreError::InvalidTeam {
            team: batting_team.name.clone(),
            reason,
        })?;
        bowling_team.validate().map_err(|reason| ScoreError::InvalidTeam {
            team: bowling_team.name.clone(),
            reason,
        })?;

        let striker = striker.unwrap_or_else(|| batting_team.players[0].clone());
        let non_striker = non_striker.unwrap_or_else(|| batting_team.players[1].clone());
        let opening_bowler = opening_bowler.unwrap_or_else(|| bowling_team.players[0].clone());

        for opener in [&striker, &non_striker] {
            if !batting_team.contains(opener) {
                return Err(ScoreError::UnknownPlayer { name: opener.clone() });
            }
        }
        if striker == non_striker {
            return Err(ScoreError::InvalidTeam {
                team: batting_team.name.clone(),
                reason: "striker and non-striker must be different players".to_string(),
            });
        }
        if !bowling_team.contains(&opening_bowler) {
            return Err(ScoreError::UnknownPlayer { name: opening_bowler });
        }

        let remaining_batsmen = batting_team
            .players
            .iter()
            .filter(|p| **p != striker && **p != non_striker)
            .cloned()
            .collect();

        let mut bowlers = HashMap::new();
        bowlers.insert(opening_bowler.clone(), BowlerFigures::default());

        log::debug!(
            "innings started: {} batting vs {}, openers {} / {}, bowler {}",
            batting_team.name,
            bowling_team.name,
            striker,
            non_striker,
            opening_bowler
        );

        Ok(Self {
            batsmen: [BatsmanCard::new(striker), BatsmanCard::new(non_striker)],
            remaining_batsmen,
            batting_team,
            bowling_team,
            runs: 0,
            wickets: 0,
            legal_balls: 0,
            partnership_runs: 0,
            bowlers,
            active_bowler: opening_bowler,
            fall_of_wickets: Vec::new(),
            timeline: Vec::new(),
            state: InningsState::InProgress,
        })
    }

    // ========================
    // Commands
    // ========================

    /// Record a delivery that counts toward the over.
    ///
    /// `runs` are credited to the striker unless `is_wicket`; a dismissal
    /// ball cannot also score (byes while out are not modeled).
    pub fn record_legal_delivery(&mut self, runs: u32, is_wicket: bool) -> Result<()> {
        self.guard_in_progress()?;
        if !LEGAL_RUN_VALUES.contains(&runs) {
            return Err(ScoreError::InvalidRuns { runs });
        }
        if is_wicket && runs != 0 {
            return Err(ScoreError::RunsOnWicket { runs });
        }

        self.runs += runs;
        self.legal_balls += 1;
        if !is_wicket {
            self.partnership_runs += runs;
        }

        let batsman = self.batsmen[0].name.clone();
        let striker = &mut self.batsmen[0];
        striker.balls_faced += 1;
        if is_wicket {
            striker.is_out = true;
        } else {
            striker.runs_scored += runs;
        }

        let bowler = self.active_bowler.clone();
        let figures = self.bowlers.entry(bowler.clone()).or_default();
        figures.balls_bowled += 1;
        figures.runs_conceded += runs;
        if is_wicket {
            figures.wickets_taken += 1;
        }

        self.timeline.push(TimelineEvent::LegalDelivery {
            runs,
            is_wicket,
            batsman: batsman.clone(),
            bowler,
        });

        if !is_wicket && runs % 2 == 1 {
            self.swap_strike();
        }

        if is_wicket {
            self.fall_wicket(batsman);
        }

        log::debug!(
            "ball: runs={} wicket={} -> {}/{} in {}",
            runs,
            is_wicket,
            self.runs,
            self.wickets,
            self.overs()
        );
        Ok(())
    }

    /// Award extra runs (no-ball, wide, bye, leg-bye). Extras never count
    /// as a legal delivery and never dismiss a batsman.
    pub fn record_extra(&mut self, kind: ExtraKind, runs: u32) -> Result<()> {
        self.guard_in_progress()?;
        if runs == 0 {
            return Err(ScoreError::InvalidExtraRuns { runs });
        }

        self.runs += runs;
        self.partnership_runs += runs;

        let bowler = self.active_bowler.clone();
        self.bowlers.entry(bowler.clone()).or_default().runs_conceded += runs;

        self.timeline.push(TimelineEvent::Extra { kind, runs, bowler });

        if kind.rotates_strike() && runs % 2 == 1 {
            self.swap_strike();
        }

        log::debug!("extra: {} {} -> {}/{}", kind.code(), runs, self.runs, self.wickets);
        Ok(())
    }

    /// Switch the active bowler, creating zero figures on first
    /// reference. Existing figures are never reset.
    pub fn select_bowler(&mut self, name: &str) -> Result<()> {
        self.guard_in_progress()?;
        if !self.bowling_team.contains(name) {
            return Err(ScoreError::UnknownPlayer { name: name.to_string() });
        }
        self.bowlers.entry(name.to_string()).or_default();
        self.active_bowler = name.to_string();
        log::debug!("bowler selected: {}", name);
        Ok(())
    }

    /// Remove the last timeline entry and reverse its effects. Returns
    /// `false` when the timeline is empty.
    ///
    /// Known carried limitations: strike-rotation swaps are not reversed,
    /// the roster-advance cursor is not rolled back (so undoing a wicket
    /// cannot restore the replaced batsman's identity), and the
    /// partnership reset by a wicket is not restored. Counter decrements
    /// clamp at zero instead of erroring.
    pub fn undo_last(&mut self) -> bool {
        let last = match self.timeline.pop() {
            Some(event) => event,
            None => return false,
        };

        match &last {
            TimelineEvent::LegalDelivery { runs, is_wicket, bowler, .. } => {
                let runs = *runs;
                self.runs = floor_sub(self.runs, runs, "innings runs");
                self.legal_balls = floor_sub(self.legal_balls, 1, "legal balls");
                self.partnership_runs = floor_sub(self.partnership_runs, runs, "partnership runs");

                // Reversed in place on the current striker slot; after an
                // odd-run swap or a wicket replacement this is not the
                // batsman who faced the ball.
                let striker = &mut self.batsmen[0];
                striker.balls_faced = floor_sub(striker.balls_faced, 1, "striker balls");
                striker.runs_scored = floor_sub(striker.runs_scored, runs, "striker runs");

                let figures = self.bowlers.entry(bowler.clone()).or_default();
                figures.balls_bowled = floor_sub(figures.balls_bowled, 1, "bowler balls");
                figures.runs_conceded = floor_sub(figures.runs_conceded, runs, "bowler runs");
                if *is_wicket {
                    figures.wickets_taken = floor_sub(figures.wickets_taken, 1, "bowler wickets");
                }

                if *is_wicket {
                    if self.wickets == 0 {
                        log::warn!("undo underflow on wickets, clamping to 0");
                    } else {
                        self.wickets -= 1;
                    }
                    self.fall_of_wickets.pop();
                    self.batsmen[0].is_out = false;
                    self.state = InningsState::InProgress;
                }
            }
            TimelineEvent::Extra { runs, bowler, .. } => {
                let runs = *runs;
                self.runs = floor_sub(self.runs, runs, "innings runs");
                self.partnership_runs = floor_sub(self.partnership_runs, runs, "partnership runs");
                let figures = self.bowlers.entry(bowler.clone()).or_default();
                figures.runs_conceded = floor_sub(figures.runs_conceded, runs, "bowler runs");
            }
        }

        log::debug!("undo: {} -> {}/{} in {}", last.label(), self.runs, self.wickets, self.overs());
        true
    }

    // ========================
    // Projections
    // ========================

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn wickets(&self) -> u8 {
        self.wickets
    }

    pub fn legal_balls(&self) -> u32 {
        self.legal_balls
    }

    pub fn overs(&self) -> String {
        format_overs(self.legal_balls)
    }

    pub fn run_rate(&self) -> f64 {
        run_rate(self.runs, self.legal_balls)
    }

    pub fn partnership_runs(&self) -> u32 {
        self.partnership_runs
    }

    pub fn state(&self) -> InningsState {
        self.state
    }

    pub fn is_all_out(&self) -> bool {
        self.state == InningsState::AllOut
    }

    pub fn striker(&self) -> &BatsmanCard {
        &self.batsmen[0]
    }

    pub fn non_striker(&self) -> &BatsmanCard {
        &self.batsmen[1]
    }

    pub fn active_bowler(&self) -> &str {
        &self.active_bowler
    }

    /// Figures for the active bowler. Falls back to zero figures if the
    /// entry is somehow missing, the way the scoreboard widget does.
    pub fn active_bowler_figures(&self) -> BowlerFigures {
        self.bowlers.get(&self.active_bowler).cloned().unwrap_or_default()
    }

    pub fn bowler_figures(&self, name: &str) -> Option<&BowlerFigures> {
        self.bowlers.get(name)
    }

    pub fn fall_of_wickets(&self) -> &[FallOfWicket] {
        &self.fall_of_wickets
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    /// Display labels of up to the last six timeline entries, oldest
    /// first.
    pub fn last_over(&self) -> Vec<String> {
        let start = self.timeline.len().saturating_sub(LAST_OVER_WINDOW);
        self.timeline[start..].iter().map(TimelineEvent::label).collect()
    }

    /// One consistent snapshot of everything the UI renders.
    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            batting_team: self.batting_team.name.clone(),
            bowling_team: self.bowling_team.name.clone(),
            runs: self.runs,
            wickets: self.wickets,
            balls: self.legal_balls,
            overs: self.overs(),
            run_rate: self.run_rate(),
            striker: self.batsmen[0].clone(),
            non_striker: self.batsmen[1].clone(),
            bowler_name: self.active_bowler.clone(),
            bowler: self.active_bowler_figures(),
            partnership_runs: self.partnership_runs,
            last_over: self.last_over(),
            fall_of_wickets: self.fall_of_wickets.clone(),
            timeline: self.timeline.clone(),
            state: self.state,
        }
    }

    // ========================
    // Internals
    // ========================

    fn guard_in_progress(&self) -> Result<()> {
        match self.state {
            InningsState::InProgress => Ok(()),
            InningsState::AllOut => Err(ScoreError::InningsOver),
        }
    }

    fn swap_strike(&mut self) {
        self.batsmen.swap(0, 1);
    }

    /// Wicket bookkeeping after the delivery itself has been applied.
    /// Fall-of-wickets reads the post-mutation score and overs, so the
    /// entry always includes the dismissal ball.
    fn fall_wicket(&mut self, batsman: String) {
        self.wickets += 1;
        self.fall_of_wickets.push(FallOfWicket {
            wicket_number: self.wickets,
            score: self.runs,
            batsman,
            over: format_overs(self.legal_balls),
        });
        self.partnership_runs = 0;

        if self.wickets >= ALL_OUT_WICKETS {
            self.state = InningsState::AllOut;
            return;
        }
        match self.remaining_batsmen.pop_front() {
            Some(next) => self.batsmen[0] = BatsmanCard::new(next),
            None => {
                // Roster exhausted: the dismissed batsman stays in the
                // slot and the state itself is the all-out sentinel.
                self.state = InningsState::AllOut;
            }
        }
    }
}

fn floor_sub(value: u32, amount: u32, what: &str) -> u32 {
    if amount > value {
        log::warn!("undo underflow on {}: {} - {}, clamping to 0", what, value, amount);
        0
    } else {
        value - amount
    }
}
