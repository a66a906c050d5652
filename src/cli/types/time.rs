//! Season year type for scoping stats requests.

use crate::error::{NflError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for season years.
///
/// There is no default season: when the user does not pick one, the player
/// view selects the first entry of the profile's available-seasons list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = NflError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_round_trip() {
        let season: Season = "2023".parse().unwrap();
        assert_eq!(season, Season::new(2023));
        assert_eq!(season.to_string(), "2023");
    }

    #[test]
    fn test_season_ordering() {
        assert!(Season::new(2023) > Season::new(2021));
    }
}
