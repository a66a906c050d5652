//! Shared roster filtering logic for the team command.

use crate::cli::types::PositionGroup;
use crate::nfl::types::RosterPlayer;

/// Filter a roster by position group and name search.
///
/// The two predicates are independent and combine with AND.
/// [`PositionGroup::All`] disables the position predicate; an absent or
/// empty search disables the name predicate. Name matching is a
/// case-insensitive substring test.
pub fn filter_roster<'a>(
    roster: &'a [RosterPlayer],
    group: PositionGroup,
    search: Option<&str>,
) -> Vec<&'a RosterPlayer> {
    let query = search.unwrap_or("").to_lowercase();
    roster
        .iter()
        .filter(|player| group.matches(&player.position))
        .filter(|player| query.is_empty() || player.name.to_lowercase().contains(&query))
        .collect()
}
