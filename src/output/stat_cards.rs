//! Stat card construction with empty-category suppression.

use serde::Serialize;

use super::format::{format_label, format_stat_value};
use crate::nfl::types::StatGroups;

/// One rendered stat category (e.g. "Passing").
///
/// Serializes directly for `--json` output; `rows` carry display-ready
/// labels and values.
#[derive(Debug, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub rows: Vec<StatRow>,
}

#[derive(Debug, Serialize)]
pub struct StatRow {
    pub label: String,
    pub value: String,
}

/// Build display cards from a set of stat categories.
///
/// A category renders only when at least one of its fields is non-null and
/// non-zero; otherwise the whole card is omitted. Within a rendered card
/// every field appears, null ones as an em-dash.
pub fn build_cards(stats: &StatGroups) -> Vec<StatCard> {
    stats
        .categories()
        .into_iter()
        .filter(|(_, entries)| has_recorded_stat(entries))
        .map(|(title, entries)| StatCard {
            title,
            rows: entries
                .into_iter()
                .map(|(key, value)| StatRow {
                    label: format_label(key),
                    value: format_stat_value(value),
                })
                .collect(),
        })
        .collect()
}

fn has_recorded_stat(entries: &[(&'static str, Option<f64>)]) -> bool {
    entries
        .iter()
        .any(|(_, value)| value.is_some_and(|v| v != 0.0))
}

/// Render cards as aligned label/value blocks separated by blank lines.
pub fn render_cards(cards: &[StatCard]) -> String {
    let mut out = String::new();
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(card.title);
        out.push('\n');
        let label_width = card
            .rows
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);
        for row in &card.rows {
            let pad = label_width - row.label.chars().count();
            out.push_str("  ");
            out.push_str(&row.label);
            out.push_str(&" ".repeat(pad + 2));
            out.push_str(&row.value);
            out.push('\n');
        }
    }
    out
}
