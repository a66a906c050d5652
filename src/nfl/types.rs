//! API response shapes for the NFL stats backend.
//!
//! These types mirror what the API returns; the application only reads and
//! filters them. Stat category objects arrive partially populated — missing
//! fields are absent, not zeroed — so every stat field is an `Option` and a
//! category counts as empty only when every field is null or zero.

use crate::cli::types::{PlayerId, Season, TeamId};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Team entry in the `/teams` listing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Team detail from `/teams/{id}`, including the roster.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub record: Option<String>,
    #[serde(default)]
    pub division_standing: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub roster: Vec<RosterPlayer>,
}

/// One roster entry. `experience` is nullable; 0 means rookie.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub jersey: Option<u16>,
    pub position: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<u16>,
    #[serde(default)]
    pub experience: Option<u8>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub headshot_url: Option<String>,
}

/// Player profile from `/players/{id}/stats`.
///
/// Superset of the roster entry fields plus career aggregates and the list
/// of seasons for which season stats and game logs exist, most recent first.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub jersey: Option<u16>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<u16>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub headshot_url: Option<String>,
    #[serde(default)]
    pub career_stats: StatGroups,
    #[serde(default)]
    pub available_seasons: Vec<Season>,
}

/// Season-scoped per-category totals from `/players/{id}/stats/{season}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStats {
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(flatten)]
    pub stats: StatGroups,
}

/// One game in a player's game log.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLogEntry {
    #[serde(default)]
    pub week: Option<u16>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(default)]
    pub won: bool,
    #[serde(flatten)]
    pub stats: StatGroups,
}

/// The five stat categories; any subset may be present.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatGroups {
    #[serde(default)]
    pub passing: Option<PassingStats>,
    #[serde(default)]
    pub rushing: Option<RushingStats>,
    #[serde(default)]
    pub receiving: Option<ReceivingStats>,
    #[serde(default)]
    pub defensive: Option<DefensiveStats>,
    #[serde(default)]
    pub fumbles: Option<FumbleStats>,
}

impl StatGroups {
    /// Present categories with their display titles and ordered entries.
    ///
    /// Absent categories are skipped here; suppression of present-but-empty
    /// categories happens at card-building time.
    pub fn categories(&self) -> Vec<(&'static str, Vec<(&'static str, Option<f64>)>)> {
        let mut out = Vec::new();
        if let Some(passing) = &self.passing {
            out.push(("Passing", passing.entries()));
        }
        if let Some(rushing) = &self.rushing {
            out.push(("Rushing", rushing.entries()));
        }
        if let Some(receiving) = &self.receiving {
            out.push(("Receiving", receiving.entries()));
        }
        if let Some(defensive) = &self.defensive {
            out.push(("Defensive", defensive.entries()));
        }
        if let Some(fumbles) = &self.fumbles {
            out.push(("Fumbles", fumbles.entries()));
        }
        out
    }
}

/// Passing stats; keys are the API's camelCase field names.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassingStats {
    #[serde(default)]
    pub completions: Option<f64>,
    #[serde(default)]
    pub attempts: Option<f64>,
    #[serde(default)]
    pub completion_pct: Option<f64>,
    #[serde(default)]
    pub yards: Option<f64>,
    #[serde(default)]
    pub touchdowns: Option<f64>,
    #[serde(default)]
    pub interceptions: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl PassingStats {
    pub fn entries(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("completions", self.completions),
            ("attempts", self.attempts),
            ("completionPct", self.completion_pct),
            ("yards", self.yards),
            ("touchdowns", self.touchdowns),
            ("interceptions", self.interceptions),
            ("rating", self.rating),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RushingStats {
    #[serde(default)]
    pub attempts: Option<f64>,
    #[serde(default)]
    pub yards: Option<f64>,
    #[serde(default)]
    pub touchdowns: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}

impl RushingStats {
    pub fn entries(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("attempts", self.attempts),
            ("yards", self.yards),
            ("touchdowns", self.touchdowns),
            ("long", self.long),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingStats {
    #[serde(default)]
    pub receptions: Option<f64>,
    #[serde(default)]
    pub targets: Option<f64>,
    #[serde(default)]
    pub yards: Option<f64>,
    #[serde(default)]
    pub touchdowns: Option<f64>,
    #[serde(default)]
    pub long: Option<f64>,
}

impl ReceivingStats {
    pub fn entries(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("receptions", self.receptions),
            ("targets", self.targets),
            ("yards", self.yards),
            ("touchdowns", self.touchdowns),
            ("long", self.long),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefensiveStats {
    #[serde(default)]
    pub total_tackles: Option<f64>,
    #[serde(default)]
    pub solo_tackles: Option<f64>,
    #[serde(default)]
    pub sacks: Option<f64>,
    #[serde(default)]
    pub tackles_for_loss: Option<f64>,
    #[serde(default)]
    pub passes_defended: Option<f64>,
    #[serde(default)]
    pub interceptions: Option<f64>,
    #[serde(default)]
    pub forced_fumbles: Option<f64>,
}

impl DefensiveStats {
    pub fn entries(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("totalTackles", self.total_tackles),
            ("soloTackles", self.solo_tackles),
            ("sacks", self.sacks),
            ("tacklesForLoss", self.tackles_for_loss),
            ("passesDefended", self.passes_defended),
            ("interceptions", self.interceptions),
            ("forcedFumbles", self.forced_fumbles),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FumbleStats {
    #[serde(default)]
    pub fumbles: Option<f64>,
    #[serde(default)]
    pub fumbles_lost: Option<f64>,
    #[serde(default)]
    pub fumbles_recovered: Option<f64>,
}

impl FumbleStats {
    pub fn entries(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("fumbles", self.fumbles),
            ("fumblesLost", self.fumbles_lost),
            ("fumblesRecovered", self.fumbles_recovered),
        ]
    }
}
