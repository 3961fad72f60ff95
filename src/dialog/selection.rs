use crate::domain::team::{Roster, Team};

/// One pickable row in the dialog's team list.
///
/// Either a team standing in for its base roster, or one of the team's
/// named sub-rosters. The two cases carry different data but are
/// treated uniformly by the rest of the dialog through the accessors
/// below.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectableEntry {
    /// The team itself, representing its base roster.
    BaseTeam(Team),
    /// A named sub-roster of a team, e.g. the "B" squad.
    NamedRoster {
        team: Team,
        roster: Roster,
        /// Precomputed display name: team name plus name addition.
        name: String,
    },
}

impl SelectableEntry {
    /// Builds the sub-roster entry for a roster with a name addition.
    pub(crate) fn named(team: &Team, roster: &Roster) -> Self {
        let addition = roster.name_addition().unwrap_or_default();
        Self::NamedRoster {
            team: team.clone(),
            roster: roster.clone(),
            name: format!("{} {}", team.name, addition),
        }
    }

    /// The underlying team, regardless of variant.
    pub fn team(&self) -> &Team {
        match self {
            SelectableEntry::BaseTeam(team) => team,
            SelectableEntry::NamedRoster { team, .. } => team,
        }
    }

    /// The specific roster this entry stands for, if it carries one.
    /// Base-team entries resolve their roster at submission time.
    pub fn roster(&self) -> Option<&Roster> {
        match self {
            SelectableEntry::BaseTeam(_) => None,
            SelectableEntry::NamedRoster { roster, .. } => Some(roster),
        }
    }

    /// The name shown in the selection list.
    pub fn display_name(&self) -> &str {
        match self {
            SelectableEntry::BaseTeam(team) => &team.name,
            SelectableEntry::NamedRoster { name, .. } => name,
        }
    }
}
