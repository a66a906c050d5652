//! HTTP client for the NFL stats API.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::cli::types::{PlayerId, Season, TeamId};
use crate::error::{NflError, Result};
use crate::nfl::types::{GameLogEntry, PlayerProfile, SeasonStats, Team, TeamSummary};


/// Client for the NFL stats API.
///
/// One GET per operation; the body is parsed as JSON and a non-2xx response
/// becomes [`NflError::Status`] carrying the HTTP status code and status
/// text. No retries, no timeouts, no auth, no caching.
#[derive(Debug, Clone)]
pub struct NflApi {
    client: Client,
    base_url: String,
    debug: bool,
}

impl NflApi {
    /// Create a client for the given base URL (trailing slash stripped).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("nfl-stats/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            debug: false,
        })
    }

    /// Print each request URL to stderr before sending.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        if self.debug {
            eprintln!("URL => {}", url);
        }

        let res = self.client.get(&url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(NflError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(res.json::<T>().await?)
    }

    /// `GET /teams` — all team summaries.
    pub async fn get_teams(&self) -> Result<Vec<TeamSummary>> {
        self.get_json(&teams_path()).await
    }

    /// `GET /teams/{id}` — team detail with roster.
    pub async fn get_team(&self, team_id: TeamId) -> Result<Team> {
        self.get_json(&team_path(team_id)).await
    }

    /// `GET /players/{id}/stats` — player profile with career stats.
    pub async fn get_player_profile(&self, player_id: PlayerId) -> Result<PlayerProfile> {
        self.get_json(&player_profile_path(player_id)).await
    }

    /// `GET /players/{id}/stats/{season}` — one season's totals.
    pub async fn get_player_season_stats(
        &self,
        player_id: PlayerId,
        season: Season,
    ) -> Result<SeasonStats> {
        self.get_json(&player_season_stats_path(player_id, season))
            .await
    }

    /// `GET /players/{id}/gamelog[/{season}]` — game log entries.
    ///
    /// The season path segment is omitted when `season` is `None`, returning
    /// the full career log.
    pub async fn get_player_game_log(
        &self,
        player_id: PlayerId,
        season: Option<Season>,
    ) -> Result<Vec<GameLogEntry>> {
        self.get_json(&player_game_log_path(player_id, season)).await
    }
}

fn teams_path() -> String {
    "/teams".to_string()
}

fn team_path(team_id: TeamId) -> String {
    format!("/teams/{}", team_id)
}

fn player_profile_path(player_id: PlayerId) -> String {
    format!("/players/{}/stats", player_id)
}

fn player_season_stats_path(player_id: PlayerId, season: Season) -> String {
    format!("/players/{}/stats/{}", player_id, season)
}

fn player_game_log_path(player_id: PlayerId, season: Option<Season>) -> String {
    match season {
        Some(season) => format!("/players/{}/gamelog/{}", player_id, season),
        None => format!("/players/{}/gamelog", player_id),
    }
}
