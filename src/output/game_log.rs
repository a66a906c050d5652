//! Game log column detection and table rendering.

use serde::Serialize;

use super::format::{format_opt, format_stat_value, EM_DASH};
use super::table::TextTable;
use crate::nfl::types::GameLogEntry;

/// Placeholder shown when the log is empty or could not be loaded.
pub const NO_GAMES_PLACEHOLDER: &str = "No game log data available.";

/// Which stat category column sets the game log table shows.
///
/// A category's columns appear only when at least one game in the log has a
/// qualifying non-zero stat for it, so the column set adapts to the player's
/// usage pattern across the fetched games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameLogColumns {
    pub passing: bool,
    pub rushing: bool,
    pub receiving: bool,
    pub defensive: bool,
    pub fumbles: bool,
}

impl GameLogColumns {
    /// Detect the visible column set for a log.
    ///
    /// Qualifying stats: passing attempts, rushing attempts, receptions,
    /// tackles or sacks, fumbles or fumble recoveries. Each check is an
    /// existential scan over the games, so appending a game can only turn
    /// columns on, never off.
    pub fn detect(games: &[GameLogEntry]) -> Self {
        Self {
            passing: games
                .iter()
                .any(|g| positive(g.stats.passing.as_ref().and_then(|s| s.attempts))),
            rushing: games
                .iter()
                .any(|g| positive(g.stats.rushing.as_ref().and_then(|s| s.attempts))),
            receiving: games
                .iter()
                .any(|g| positive(g.stats.receiving.as_ref().and_then(|s| s.receptions))),
            defensive: games.iter().any(|g| {
                let defensive = g.stats.defensive.as_ref();
                positive(defensive.and_then(|s| s.total_tackles))
                    || positive(defensive.and_then(|s| s.sacks))
            }),
            fumbles: games.iter().any(|g| {
                let fumbles = g.stats.fumbles.as_ref();
                positive(fumbles.and_then(|s| s.fumbles))
                    || positive(fumbles.and_then(|s| s.fumbles_recovered))
            }),
        }
    }
}

fn positive(value: Option<f64>) -> bool {
    value.is_some_and(|v| v > 0.0)
}

/// Render the game log as a text table, or the placeholder when empty.
pub fn render_game_log(games: &[GameLogEntry]) -> String {
    if games.is_empty() {
        return format!("{}\n", NO_GAMES_PLACEHOLDER);
    }

    let columns = GameLogColumns::detect(games);
    let mut headers: Vec<&str> = vec!["Wk", "Date", "Opp", "Result"];
    if columns.passing {
        headers.extend(["Cmp/Att", "Yds", "TD", "INT", "Rtg"]);
    }
    if columns.rushing {
        headers.extend(["Rush", "Yds", "TD"]);
    }
    if columns.receiving {
        headers.extend(["Rec", "Yds", "TD"]);
    }
    if columns.defensive {
        headers.extend(["Tkl", "Solo", "Sck", "TFL", "PD", "INT", "FF"]);
    }
    if columns.fumbles {
        headers.extend(["Fum", "Lost"]);
    }

    let mut table = TextTable::new(headers);
    for game in games {
        table.add_row(game_row(game, columns));
    }
    table.render()
}

fn game_row(game: &GameLogEntry, columns: GameLogColumns) -> Vec<String> {
    let mut row = vec![
        format_opt(game.week.as_ref()),
        game.date.clone().unwrap_or_else(|| EM_DASH.to_string()),
        game.opponent.clone().unwrap_or_else(|| EM_DASH.to_string()),
        if game.won { "W" } else { "L" }.to_string(),
    ];

    if columns.passing {
        let passing = game.stats.passing.clone().unwrap_or_default();
        row.push(completions_attempts(passing.completions, passing.attempts));
        row.push(format_stat_value(passing.yards));
        row.push(format_stat_value(passing.touchdowns));
        row.push(format_stat_value(passing.interceptions));
        row.push(format_stat_value(passing.rating));
    }
    if columns.rushing {
        let rushing = game.stats.rushing.clone().unwrap_or_default();
        row.push(format_stat_value(rushing.attempts));
        row.push(format_stat_value(rushing.yards));
        row.push(format_stat_value(rushing.touchdowns));
    }
    if columns.receiving {
        let receiving = game.stats.receiving.clone().unwrap_or_default();
        row.push(format_stat_value(receiving.receptions));
        row.push(format_stat_value(receiving.yards));
        row.push(format_stat_value(receiving.touchdowns));
    }
    if columns.defensive {
        let defensive = game.stats.defensive.clone().unwrap_or_default();
        row.push(format_stat_value(defensive.total_tackles));
        row.push(format_stat_value(defensive.solo_tackles));
        row.push(format_stat_value(defensive.sacks));
        row.push(format_stat_value(defensive.tackles_for_loss));
        row.push(format_stat_value(defensive.passes_defended));
        row.push(format_stat_value(defensive.interceptions));
        row.push(format_stat_value(defensive.forced_fumbles));
    }
    if columns.fumbles {
        let fumbles = game.stats.fumbles.clone().unwrap_or_default();
        row.push(format_stat_value(fumbles.fumbles));
        row.push(format_stat_value(fumbles.fumbles_lost));
    }
    row
}

fn completions_attempts(completions: Option<f64>, attempts: Option<f64>) -> String {
    if completions.is_none() && attempts.is_none() {
        return EM_DASH.to_string();
    }
    format!(
        "{}/{}",
        format_stat_value(completions),
        format_stat_value(attempts)
    )
}
