// Registration domain module
// Contains the registration entity created by a successful submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::{RegistrationId, RosterId};
use crate::domain::team::{Roster, Team, TeamRef};

/// Confirmation state of a registration, decided by the organizer
/// after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    WaitingList,
    Declined,
}

/// A team registration as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RegistrationId,
    #[serde(default)]
    pub comment: Option<String>,
    pub status: RegistrationStatus,
    pub time_registered: DateTime<Utc>,
}

/// Reference to a roster by id, as embedded in request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRef {
    pub id: RosterId,
}

impl From<&Roster> for RosterRef {
    fn from(roster: &Roster) -> Self {
        Self { id: roster.id }
    }
}

/// Registration request submitted to the server.
///
/// The comment is omitted entirely when the user left it blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub comment: Option<String>,
    pub team: TeamRef,
    pub roster: RosterRef,
}

impl RegistrationDraft {
    /// Builds a registration request. Blank or whitespace-only
    /// comments collapse to no comment.
    pub fn new(comment: Option<&str>, team: &Team, roster: &Roster) -> Self {
        Self {
            comment: comment
                .map(str::trim)
                .filter(|comment| !comment.is_empty())
                .map(str::to_string),
            team: TeamRef::from(team),
            roster: RosterRef::from(roster),
        }
    }
}

/// A successful submission with the locally known team and roster
/// attached, ready for immediate display by the hosting page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedRegistration {
    pub registration: Registration,
    pub team: Team,
    pub roster: Roster,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::{DivisionAge, DivisionType, Season};
    use crate::domain::ids::{SeasonId, TeamId};

    fn team() -> Team {
        Team {
            id: TeamId(3),
            name: "Falcons".to_string(),
            rosters: vec![],
        }
    }

    fn roster() -> Roster {
        Roster {
            id: RosterId(11),
            season: Season {
                id: SeasonId(1),
                year: 2024,
                plus_one_year: false,
            },
            division_age: DivisionAge::Regular,
            division_type: DivisionType::Open,
            context: None,
            name_addition: None,
            version: 1,
        }
    }

    #[test]
    fn blank_comment_collapses_to_none() {
        let draft = RegistrationDraft::new(Some("   "), &team(), &roster());
        assert_eq!(draft.comment, None);

        let draft = RegistrationDraft::new(None, &team(), &roster());
        assert_eq!(draft.comment, None);
    }

    #[test]
    fn comment_is_trimmed_and_kept() {
        let draft = RegistrationDraft::new(Some(" see you there "), &team(), &roster());
        assert_eq!(draft.comment.as_deref(), Some("see you there"));
    }

    #[test]
    fn draft_references_team_and_roster_by_id() {
        let draft = RegistrationDraft::new(None, &team(), &roster());

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["team"]["id"], 3);
        assert_eq!(json["roster"]["id"], 11);
    }

    #[test]
    fn status_uses_backend_wire_values() {
        assert_eq!(
            serde_json::to_string(&RegistrationStatus::WaitingList).unwrap(),
            "\"WAITING_LIST\""
        );
    }
}
