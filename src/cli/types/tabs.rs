//! Stat view selection for the player command.

use std::fmt;

/// Which stats view the player command renders.
///
/// The three views are mutually exclusive. `Career` reads the stats embedded
/// in the player profile and triggers no further fetch; `Season` and
/// `GameLog` each trigger exactly one fetch scoped to the selected season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatTab {
    /// Career aggregate stats from the profile
    Career,
    /// Per-category totals for one season
    Season,
    /// Per-game records for one season
    Gamelog,
}

impl fmt::Display for StatTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatTab::Career => "career",
            StatTab::Season => "season",
            StatTab::Gamelog => "gamelog",
        };
        write!(f, "{}", s)
    }
}
