// Team domain module
// Contains the team aggregate, its rosters and the roster creation draft

use serde::{Deserialize, Serialize};

use crate::domain::event::{Context, Division, DivisionAge, DivisionType, Season, TournamentEdition};
use crate::domain::ids::{RosterId, TeamId};

/// A team's registered squad for one season, division and context
/// combination.
///
/// A roster either is the team's base squad (blank name addition) or a
/// named sub-squad such as a "B" team. At most one base roster exists
/// per season + division + context tuple; the eligibility logic relies
/// on that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub id: RosterId,
    pub season: Season,
    pub division_age: DivisionAge,
    pub division_type: DivisionType,
    #[serde(default)]
    pub context: Option<Context>,
    #[serde(default)]
    pub name_addition: Option<String>,
    /// Optimistic locking counter maintained by the server.
    #[serde(default)]
    pub version: u32,
}

impl Roster {
    /// Whether this is the team's base roster (no name addition, or
    /// only whitespace in it).
    pub fn is_base(&self) -> bool {
        self.name_addition
            .as_deref()
            .map_or(true, |addition| addition.trim().is_empty())
    }

    /// The non-blank name addition, if any.
    pub fn name_addition(&self) -> Option<&str> {
        self.name_addition
            .as_deref()
            .map(str::trim)
            .filter(|addition| !addition.is_empty())
    }

    /// Whether this roster plays the given division.
    pub fn matches_division(&self, division: &Division) -> bool {
        self.division_age == division.division_age && self.division_type == division.division_type
    }

    /// Whether this roster belongs to the edition's season and is
    /// context-equivalent to it.
    pub fn matches_edition(&self, edition: &TournamentEdition) -> bool {
        self.season.id == edition.season.id && edition.context_matches(self.context.as_ref())
    }
}

/// A persistent team owned by the current user's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub rosters: Vec<Roster>,
}

impl Team {
    /// Finds this team's base roster for the given division and
    /// edition: season, division fields and context all match and the
    /// roster carries no name addition.
    pub fn base_roster_for(
        &self,
        division: &Division,
        edition: &TournamentEdition,
    ) -> Option<&Roster> {
        self.rosters.iter().find(|roster| {
            roster.matches_division(division) && roster.matches_edition(edition) && roster.is_base()
        })
    }
}

/// Reference to a team by id, as embedded in request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: TeamId,
}

impl From<&Team> for TeamRef {
    fn from(team: &Team) -> Self {
        Self { id: team.id }
    }
}

/// Roster creation request
///
/// Carries the placeholder id until the server assigns a real one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterDraft {
    pub id: RosterId,
    pub division_age: DivisionAge,
    pub division_type: DivisionType,
    pub season: Season,
    pub context: Option<Context>,
    pub name_addition: Option<String>,
    pub team: TeamRef,
}

impl RosterDraft {
    /// Builds a creation request for the given team, division and
    /// edition. `name_addition` is only set when the user asked for a
    /// named sub-roster.
    pub fn new(
        team: &Team,
        division: &Division,
        edition: &TournamentEdition,
        name_addition: Option<String>,
    ) -> Self {
        Self {
            id: RosterId::UNSAVED,
            division_age: division.division_age,
            division_type: division.division_type,
            season: edition.season.clone(),
            context: edition.context.clone(),
            name_addition,
            team: TeamRef::from(team),
        }
    }
}
