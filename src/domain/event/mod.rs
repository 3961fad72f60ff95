// Event domain module
// Contains the event aggregate, its edition and division types

pub mod value_objects;

use serde::{Deserialize, Serialize};

use crate::domain::ids::{DivisionId, EditionId};

pub use value_objects::{Context, DivisionAge, DivisionType, Season};

/// A division offered by an event edition: one age category plus one
/// competition type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub id: DivisionId,
    pub division_age: DivisionAge,
    pub division_type: DivisionType,
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.division_age, self.division_type)
    }
}

/// A specific running of a recurring event
///
/// References the season it takes place in and, optionally, the league
/// context it counts towards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentEdition {
    pub id: EditionId,
    pub name: String,
    pub season: Season,
    #[serde(default)]
    pub context: Option<Context>,
}

impl TournamentEdition {
    /// Context equivalence as used throughout registration: a roster
    /// context matches the edition when both are absent, or both are
    /// present with the same id.
    pub fn context_matches(&self, other: Option<&Context>) -> bool {
        match (&self.context, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.id == b.id,
            _ => false,
        }
    }
}

/// The event shown by the hosting page, together with the edition the
/// registration dialog targets.
///
/// `is_single_event` distinguishes one-off events from editions of a
/// recurring series; it only affects which name the dialog displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    pub is_single_event: bool,
    pub divisions: Vec<Division>,
    pub edition: TournamentEdition,
}

impl Event {
    /// The title the dialog shows: the event's own name for single
    /// events, the edition name otherwise.
    pub fn display_name(&self) -> &str {
        if self.is_single_event {
            &self.name
        } else {
            &self.edition.name
        }
    }

    /// Looks a division up by id in this event's division list.
    pub fn division(&self, id: DivisionId) -> Option<&Division> {
        self.divisions.iter().find(|division| division.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{ContextId, SeasonId};

    fn edition(context: Option<Context>) -> TournamentEdition {
        TournamentEdition {
            id: EditionId(1),
            name: "Spring League 2024".to_string(),
            season: Season {
                id: SeasonId(5),
                year: 2024,
                plus_one_year: false,
            },
            context,
        }
    }

    fn context(id: i64) -> Context {
        Context {
            id: ContextId(id),
            acronym: "NE".to_string(),
        }
    }

    #[test]
    fn contexts_match_when_both_absent() {
        assert!(edition(None).context_matches(None));
    }

    #[test]
    fn contexts_match_on_equal_ids() {
        let ed = edition(Some(context(3)));
        assert!(ed.context_matches(Some(&context(3))));
    }

    #[test]
    fn contexts_differ_on_different_ids() {
        let ed = edition(Some(context(3)));
        assert!(!ed.context_matches(Some(&context(4))));
    }

    #[test]
    fn contexts_differ_when_only_one_side_present() {
        let ed = edition(Some(context(3)));
        assert!(!ed.context_matches(None));
        assert!(!edition(None).context_matches(Some(&context(3))));
    }

    #[test]
    fn display_name_prefers_event_name_for_single_events() {
        let event = Event {
            name: "Beach Cup".to_string(),
            is_single_event: true,
            divisions: vec![],
            edition: edition(None),
        };
        assert_eq!(event.display_name(), "Beach Cup");

        let series = Event {
            is_single_event: false,
            ..event
        };
        assert_eq!(series.display_name(), "Spring League 2024");
    }
}
