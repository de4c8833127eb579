//! Leagues and the shop's category filter.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The league a team plays in. Serves as the shop's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    #[serde(rename = "La Liga")]
    LaLiga,
    #[serde(rename = "Premier League")]
    PremierLeague,
    #[serde(rename = "Serie A")]
    SerieA,
    #[serde(rename = "Bundesliga")]
    Bundesliga,
    #[serde(rename = "Saudi Pro League")]
    SaudiProLeague,
    #[serde(rename = "International")]
    International,
}

impl League {
    pub const ALL: [League; 6] = [
        League::LaLiga,
        League::PremierLeague,
        League::SerieA,
        League::Bundesliga,
        League::SaudiProLeague,
        League::International,
    ];

    /// Display name, as shown on the filter chips.
    pub fn name(&self) -> &'static str {
        match self {
            League::LaLiga => "La Liga",
            League::PremierLeague => "Premier League",
            League::SerieA => "Serie A",
            League::Bundesliga => "Bundesliga",
            League::SaudiProLeague => "Saudi Pro League",
            League::International => "International",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for League {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        League::ALL
            .into_iter()
            .find(|league| league.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CommerceError::UnknownLeague(s.to_string()))
    }
}

/// Sentinel label for the unfiltered shop.
pub const ALL_CATEGORIES: &str = "All";

/// The shop's active category: a league or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    League(League),
}

impl CategoryFilter {
    /// Whether a product in `league` passes this filter.
    pub fn matches(&self, league: League) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::League(wanted) => *wanted == league,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::League(league) => league.name(),
        }
    }
}

impl From<League> for CategoryFilter {
    fn from(league: League) -> Self {
        CategoryFilter::League(league)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_CATEGORIES) {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::League)
        }
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = CommerceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_round_trips_through_name() {
        for league in League::ALL {
            assert_eq!(league.name().parse::<League>().unwrap(), league);
        }
    }

    #[test]
    fn test_league_parse_case_insensitive() {
        assert_eq!("premier league".parse::<League>().unwrap(), League::PremierLeague);
        assert!("Ligue 1".parse::<League>().is_err());
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(League::SerieA));
        let la_liga = CategoryFilter::League(League::LaLiga);
        assert!(la_liga.matches(League::LaLiga));
        assert!(!la_liga.matches(League::International));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "International".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::League(League::International)
        );
        assert!("Everything".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_filter_serde_uses_labels() {
        let json = serde_json::to_string(&CategoryFilter::League(League::LaLiga)).unwrap();
        assert_eq!(json, "\"La Liga\"");
        let back: CategoryFilter = serde_json::from_str("\"All\"").unwrap();
        assert_eq!(back, CategoryFilter::All);
    }
}
