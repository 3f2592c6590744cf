pub mod events;
pub mod scoreboard;
pub mod team;

pub use events::{ExtraKind, TimelineEvent};
pub use scoreboard::{BatsmanCard, BowlerFigures, FallOfWicket, InningsState, Scoreboard};
pub use team::Team;
