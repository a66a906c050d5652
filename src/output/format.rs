//! Value and label formatting for stat display.

use std::fmt;

/// Placeholder for null/absent values.
pub const EM_DASH: &str = "—";

/// Derive a display label from a camelCase stat key.
///
/// Inserts a space before each internal capital letter, capitalizes the
/// first letter, and renders the first literal `Pct` as `%`:
/// `"passingYards"` → `"Passing Yards"`, `"fieldGoalPct"` → `"Field Goal %"`.
pub fn format_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                label.push(' ');
            }
            label.push(ch);
        }
    }
    label.replacen("Pct", "%", 1)
}

/// Format a stat value: integers display exactly, non-integers round to one
/// decimal place, and absent values display as an em-dash.
pub fn format_stat_value(value: Option<f64>) -> String {
    match value {
        None => EM_DASH.to_string(),
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{:.1}", v),
    }
}

/// Format years of experience: 0 is a rookie.
pub fn format_experience(experience: Option<u8>) -> String {
    match experience {
        None => EM_DASH.to_string(),
        Some(0) => "R".to_string(),
        Some(years) => years.to_string(),
    }
}

/// Format any optional displayable value, with an em-dash for `None`.
pub fn format_opt<T: fmt::Display>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => EM_DASH.to_string(),
    }
}
