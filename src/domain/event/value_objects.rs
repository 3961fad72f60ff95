use serde::{Deserialize, Serialize};

use crate::domain::ids::{ContextId, SeasonId};

/// Age category of a division
///
/// Wire values follow the backend's convention of upper snake case
/// (`"REGULAR"`, `"U17"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DivisionAge {
    /// No age restriction
    Regular,
    U14,
    U17,
    U20,
    U23,
    /// Players above the masters age threshold
    Masters,
    Grandmasters,
}

/// Competition type of a division
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DivisionType {
    Open,
    Women,
    Mixed,
}

impl std::fmt::Display for DivisionAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivisionAge::Regular => write!(f, "regular"),
            DivisionAge::U14 => write!(f, "u14"),
            DivisionAge::U17 => write!(f, "u17"),
            DivisionAge::U20 => write!(f, "u20"),
            DivisionAge::U23 => write!(f, "u23"),
            DivisionAge::Masters => write!(f, "masters"),
            DivisionAge::Grandmasters => write!(f, "grandmasters"),
        }
    }
}

impl std::fmt::Display for DivisionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivisionType::Open => write!(f, "open"),
            DivisionType::Women => write!(f, "women"),
            DivisionType::Mixed => write!(f, "mixed"),
        }
    }
}

/// A playing season
///
/// `plus_one_year` marks seasons that span a year boundary (typically
/// indoor seasons), displayed as e.g. `2024/25`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: SeasonId,
    pub year: i32,
    #[serde(default)]
    pub plus_one_year: bool,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.plus_one_year {
            write!(f, "{}/{:02}", self.year, (self.year + 1) % 100)
        } else {
            write!(f, "{}", self.year)
        }
    }
}

/// A league or regional context an edition (and its rosters) can be
/// bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub id: ContextId,
    pub acronym: String,
}
