//! Teams list view: fetch all teams and filter by name or abbreviation.

use crate::error::Result;
use crate::nfl::types::TeamSummary;
use crate::nfl::NflApi;

/// Case-insensitive substring match against team name OR abbreviation.
///
/// An empty search matches every team. Recomputed from the full list on
/// every call; the list never mutates.
pub fn filter_teams<'a>(teams: &'a [TeamSummary], search: &str) -> Vec<&'a TeamSummary> {
    let query = search.to_lowercase();
    teams
        .iter()
        .filter(|team| {
            team.name.to_lowercase().contains(&query)
                || team.abbreviation.to_lowercase().contains(&query)
        })
        .collect()
}

/// Fetch all teams and print the filtered list.
pub async fn handle_teams(api: &NflApi, search: Option<String>, as_json: bool) -> Result<()> {
    let teams = api.get_teams().await?;
    let filtered = filter_teams(&teams, search.as_deref().unwrap_or(""));

    if as_json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No teams found");
        return Ok(());
    }

    for team in &filtered {
        println!(
            "{:>4}  {:<4} {}",
            team.id.as_u32(),
            team.abbreviation,
            team.name
        );
    }
    println!();
    println!("{} teams", filtered.len());
    Ok(())
}
