//! Team detail view: header plus the position/name-filtered roster table.

use super::roster_filters::filter_roster;
use crate::cli::types::{PositionGroup, TeamId};
use crate::error::Result;
use crate::nfl::types::{RosterPlayer, Team};
use crate::nfl::NflApi;
use crate::output::format::{format_experience, format_opt, EM_DASH};
use crate::output::TextTable;

/// Fetch one team and print its header and filtered roster.
pub async fn handle_team(
    api: &NflApi,
    team_id: TeamId,
    position: PositionGroup,
    search: Option<String>,
    as_json: bool,
) -> Result<()> {
    let team = api.get_team(team_id).await?;
    let roster = filter_roster(&team.roster, position, search.as_deref());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&roster)?);
        return Ok(());
    }

    print_team_header(&team);
    print!("{}", roster_table(&roster).render());
    Ok(())
}

fn print_team_header(team: &Team) {
    println!("{} ({})", team.name, team.abbreviation);
    if let Some(record) = &team.record {
        println!("Record: {}", record);
    }
    if let Some(standing) = &team.division_standing {
        println!("Standing: {}", standing);
    }
    if let Some(venue) = &team.venue {
        println!("Venue: {}", venue);
    }
    println!();
}

fn roster_table(roster: &[&RosterPlayer]) -> TextTable {
    let mut table = TextTable::new([
        "Player", "#", "Pos", "Age", "Ht", "Wt", "Exp", "College", "Status",
    ]);

    if roster.is_empty() {
        table.add_span_row("No players found");
        return table;
    }

    for player in roster {
        table.add_row([
            player.name.clone(),
            format_opt(player.jersey.as_ref()),
            player.position.clone(),
            format_opt(player.age.as_ref()),
            player.height.clone().unwrap_or_else(|| EM_DASH.to_string()),
            format_opt(player.weight.as_ref()),
            format_experience(player.experience),
            player
                .college
                .clone()
                .unwrap_or_else(|| EM_DASH.to_string()),
            player.status.clone().unwrap_or_else(|| EM_DASH.to_string()),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::PlayerId;

    fn player(name: &str, position: &str, experience: Option<u8>) -> RosterPlayer {
        RosterPlayer {
            id: PlayerId::new(1),
            name: name.to_string(),
            jersey: Some(12),
            position: position.to_string(),
            age: Some(27),
            height: Some("6-2".to_string()),
            weight: Some(215),
            experience,
            college: None,
            status: Some("Active".to_string()),
            headshot_url: None,
        }
    }

    #[test]
    fn test_empty_roster_renders_no_players_row() {
        let rendered = roster_table(&[]).render();
        assert!(rendered.contains("No players found"));
    }

    #[test]
    fn test_roster_row_formatting() {
        let rookie = player("Rookie Player", "CB", Some(0));
        let veteran = player("Veteran Player", "QB", Some(5));
        let unknown = player("Unknown Player", "WR", None);
        let rendered = roster_table(&[&rookie, &veteran, &unknown]).render();

        let rookie_line = rendered
            .lines()
            .find(|l| l.starts_with("Rookie Player"))
            .unwrap();
        assert!(rookie_line.contains(" R "));

        let veteran_line = rendered
            .lines()
            .find(|l| l.starts_with("Veteran Player"))
            .unwrap();
        assert!(veteran_line.contains(" 5 "));

        let unknown_line = rendered
            .lines()
            .find(|l| l.starts_with("Unknown Player"))
            .unwrap();
        assert!(unknown_line.contains(" — "));

        // College is absent for all three rows
        assert!(rookie_line.contains("—"));
    }
}
