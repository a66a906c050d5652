//! Player view: profile header plus career, season, or game log stats.

use serde::Serialize;

use crate::cli::types::{PlayerId, Season, StatTab};
use crate::error::Result;
use crate::nfl::types::PlayerProfile;
use crate::nfl::NflApi;
use crate::output::game_log::render_game_log;
use crate::output::stat_cards::{build_cards, render_cards, StatCard};

/// Placeholder shown when no season stats could be loaded.
pub const NO_SEASON_STATS_PLACEHOLDER: &str = "Select a season to view stats.";

/// Configuration for the player view.
#[derive(Debug)]
pub struct PlayerViewParams {
    pub player_id: PlayerId,
    pub tab: StatTab,
    pub season: Option<Season>,
    pub as_json: bool,
}

/// The season the view scopes to when the user picked none: the first entry
/// of the profile's available-seasons list, chosen once per profile load.
pub fn default_season(profile: &PlayerProfile) -> Option<Season> {
    profile.available_seasons.first().copied()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerViewJson<'a> {
    profile: &'a PlayerProfile,
    tab: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cards: Option<Vec<StatCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    game_log: Option<serde_json::Value>,
}

/// Fetch the player profile and render the selected stats view.
///
/// The career tab reads the stats embedded in the profile and performs no
/// further fetch. The season and gamelog tabs each perform exactly one fetch
/// scoped to the selected season, and that response feeds only the view it
/// was requested for. A failed secondary fetch is ignored; the view degrades
/// to its placeholder. Only the profile fetch can fail the command.
pub async fn handle_player(api: &NflApi, params: PlayerViewParams) -> Result<()> {
    let profile = api.get_player_profile(params.player_id).await?;
    let selected_season = params.season.or_else(|| default_season(&profile));

    match params.tab {
        StatTab::Career => {
            let cards = build_cards(&profile.career_stats);
            if params.as_json {
                print_json(&profile, params.tab, None, Some(cards), None)?;
            } else {
                print_profile_header(&profile);
                println!("Career Stats");
                println!();
                print!("{}", render_cards(&cards));
            }
        }

        StatTab::Season => {
            let stats = match selected_season {
                Some(season) => api
                    .get_player_season_stats(params.player_id, season)
                    .await
                    .ok(),
                None => None,
            };
            let cards = stats.as_ref().map(|s| build_cards(&s.stats));

            if params.as_json {
                print_json(&profile, params.tab, selected_season, cards, None)?;
            } else {
                print_profile_header(&profile);
                match selected_season {
                    Some(season) => println!("Season Stats ({})", season),
                    None => println!("Season Stats"),
                }
                println!();
                match cards {
                    Some(cards) => print!("{}", render_cards(&cards)),
                    None => println!("{}", NO_SEASON_STATS_PLACEHOLDER),
                }
            }
        }

        StatTab::Gamelog => {
            // No available season means the full career log (no path segment).
            let games = api
                .get_player_game_log(params.player_id, selected_season)
                .await
                .unwrap_or_default();

            if params.as_json {
                let games_json = serde_json::to_value(&games)?;
                print_json(&profile, params.tab, selected_season, None, Some(games_json))?;
            } else {
                print_profile_header(&profile);
                match selected_season {
                    Some(season) => println!("Game Log ({})", season),
                    None => println!("Game Log (career)"),
                }
                println!();
                print!("{}", render_game_log(&games));
            }
        }
    }

    Ok(())
}

fn print_json(
    profile: &PlayerProfile,
    tab: StatTab,
    season: Option<Season>,
    cards: Option<Vec<StatCard>>,
    game_log: Option<serde_json::Value>,
) -> Result<()> {
    let view = PlayerViewJson {
        profile,
        tab: tab.to_string(),
        season,
        cards,
        game_log,
    };
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn print_profile_header(profile: &PlayerProfile) {
    let mut badges = Vec::new();
    if let Some(position) = &profile.position {
        badges.push(position.clone());
    }
    if let Some(team) = &profile.team {
        badges.push(team.clone());
    }
    if let Some(jersey) = profile.jersey {
        badges.push(format!("#{}", jersey));
    }
    if badges.is_empty() {
        println!("{}", profile.name);
    } else {
        println!("{}  [{}]", profile.name, badges.join(" | "));
    }

    let mut bio = Vec::new();
    if let Some(age) = profile.age {
        bio.push(format!("Age {}", age));
    }
    if let Some(height) = &profile.height {
        bio.push(format!("Ht {}", height));
    }
    if let Some(weight) = profile.weight {
        bio.push(format!("Wt {}", weight));
    }
    if let Some(college) = &profile.college {
        bio.push(college.clone());
    }
    if !bio.is_empty() {
        println!("{}", bio.join(" | "));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_seasons(seasons: &[u16]) -> PlayerProfile {
        PlayerProfile {
            id: PlayerId::new(4046),
            name: "Example Player".to_string(),
            position: Some("QB".to_string()),
            team: None,
            jersey: None,
            age: None,
            height: None,
            weight: None,
            college: None,
            headshot_url: None,
            career_stats: Default::default(),
            available_seasons: seasons.iter().map(|&y| Season::new(y)).collect(),
        }
    }

    #[test]
    fn test_default_season_is_first_available() {
        let profile = profile_with_seasons(&[2023, 2022, 2021]);
        assert_eq!(default_season(&profile), Some(Season::new(2023)));
    }

    #[test]
    fn test_default_season_without_seasons() {
        let profile = profile_with_seasons(&[]);
        assert_eq!(default_season(&profile), None);
    }

    #[test]
    fn test_explicit_season_overrides_default() {
        let profile = profile_with_seasons(&[2023, 2022, 2021]);
        let params = PlayerViewParams {
            player_id: PlayerId::new(4046),
            tab: StatTab::Season,
            season: Some(Season::new(2021)),
            as_json: false,
        };
        let selected = params.season.or_else(|| default_season(&profile));
        assert_eq!(selected, Some(Season::new(2021)));
    }
}
