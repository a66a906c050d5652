//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{PlayerId, PositionGroup, Season, StatTab, TeamId};

#[derive(Debug, Parser)]
#[clap(name = "nfl-stats", about = "NFL team and player statistics CLI")]
pub struct NflStats {
    /// Base URL of the stats API (or set `NFL_API_URL` env var).
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Print request URLs for debugging.
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all teams.
    ///
    /// Fetches `/teams` and filters client-side by a case-insensitive
    /// substring match against team name or abbreviation.
    Teams {
        /// Filter by team name or abbreviation (substring match).
        #[clap(long, short)]
        search: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one team and its roster.
    ///
    /// Fetches `/teams/{id}` and filters the roster by position group and
    /// player name; the two filters combine with AND.
    Team {
        /// Team ID.
        team_id: TeamId,

        /// Position group filter (ALL disables it): `-p DB`.
        #[clap(short = 'p', long = "position", default_value_t = PositionGroup::All, value_parser = clap::value_parser!(PositionGroup))]
        position: PositionGroup,

        /// Filter by player name (substring match).
        #[clap(long, short)]
        search: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show a player profile with career, season, or game log stats.
    ///
    /// Fetches `/players/{id}/stats`; the season and gamelog tabs trigger
    /// one further fetch scoped to the selected season.
    Player {
        /// Player ID.
        player_id: PlayerId,

        /// Which stats view to render.
        #[clap(long, short, value_enum, default_value_t = StatTab::Career)]
        tab: StatTab,

        /// Season year (defaults to the player's most recent season with data).
        #[clap(long, short)]
        season: Option<Season>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
