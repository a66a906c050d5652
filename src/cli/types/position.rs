//! Roster position groups and the static group-to-codes table.

use crate::error::NflError;
use std::fmt;
use std::str::FromStr;

/// Roster filter buckets for NFL position codes.
///
/// Each group maps to a fixed set of raw position codes as reported on team
/// rosters (e.g. `DB` covers CB, S, FS, SS, and the literal DB code). A
/// player's position code is matched against this static table, never
/// inferred. `All` is the sentinel that disables position filtering.
///
/// # Examples
///
/// ```rust
/// use nfl_stats::PositionGroup;
///
/// assert!(PositionGroup::DB.matches("FS"));
/// assert!(!PositionGroup::DB.matches("WR"));
/// assert!(PositionGroup::All.matches("WR"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    All,
    QB,
    RB,
    WR,
    TE,
    OL,
    DL,
    LB,
    DB,
    ST,
}

impl PositionGroup {
    /// Every group in display order, `All` first.
    pub const ALL: [PositionGroup; 10] = [
        PositionGroup::All,
        PositionGroup::QB,
        PositionGroup::RB,
        PositionGroup::WR,
        PositionGroup::TE,
        PositionGroup::OL,
        PositionGroup::DL,
        PositionGroup::LB,
        PositionGroup::DB,
        PositionGroup::ST,
    ];

    /// The raw position codes this group covers.
    ///
    /// Returns `None` for `All`, which matches every code.
    pub fn codes(&self) -> Option<&'static [&'static str]> {
        match self {
            PositionGroup::All => None,
            PositionGroup::QB => Some(&["QB"]),
            PositionGroup::RB => Some(&["RB", "FB"]),
            PositionGroup::WR => Some(&["WR"]),
            PositionGroup::TE => Some(&["TE"]),
            PositionGroup::OL => Some(&["OT", "OG", "C", "OL", "T", "G"]),
            PositionGroup::DL => Some(&["DE", "DT", "DL", "NT"]),
            PositionGroup::LB => Some(&["LB", "OLB", "ILB", "MLB"]),
            PositionGroup::DB => Some(&["CB", "S", "FS", "SS", "DB"]),
            PositionGroup::ST => Some(&["K", "P", "LS"]),
        }
    }

    /// Whether a raw roster position code belongs to this group.
    pub fn matches(&self, position: &str) -> bool {
        match self.codes() {
            Some(codes) => codes.contains(&position),
            None => true,
        }
    }
}

impl fmt::Display for PositionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PositionGroup::All => "All",
            PositionGroup::QB => "QB",
            PositionGroup::RB => "RB",
            PositionGroup::WR => "WR",
            PositionGroup::TE => "TE",
            PositionGroup::OL => "OL",
            PositionGroup::DL => "DL",
            PositionGroup::LB => "LB",
            PositionGroup::DB => "DB",
            PositionGroup::ST => "ST",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PositionGroup {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(PositionGroup::All),
            "QB" => Ok(PositionGroup::QB),
            "RB" => Ok(PositionGroup::RB),
            "WR" => Ok(PositionGroup::WR),
            "TE" => Ok(PositionGroup::TE),
            "OL" => Ok(PositionGroup::OL),
            "DL" => Ok(PositionGroup::DL),
            "LB" => Ok(PositionGroup::LB),
            "DB" => Ok(PositionGroup::DB),
            "ST" => Ok(PositionGroup::ST),
            _ => Err(NflError::InvalidPositionGroup {
                group: s.to_string(),
            }),
        }
    }
}
