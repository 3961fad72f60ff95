use std::cmp::Ordering;

use crate::dialog::selection::SelectableEntry;
use crate::domain::event::{Division, TournamentEdition};
use crate::domain::team::Team;

/// Derives the list of selectable entries for a division.
///
/// Every team appears once as a base entry. A roster additionally
/// appears as its own sub-entry when it belongs to the edition's
/// season, plays the given division, is context-equivalent to the
/// edition and carries a non-empty name addition — base rosters are
/// already represented by their team's entry.
///
/// The combined list is ordered case-insensitively by display name.
pub(crate) fn derive_entries(
    teams: &[Team],
    division: &Division,
    edition: &TournamentEdition,
) -> Vec<SelectableEntry> {
    let mut entries: Vec<SelectableEntry> = teams
        .iter()
        .map(|team| SelectableEntry::BaseTeam(team.clone()))
        .collect();

    for team in teams {
        for roster in &team.rosters {
            if roster.matches_edition(edition)
                && roster.matches_division(division)
                && roster.name_addition().is_some()
            {
                entries.push(SelectableEntry::named(team, roster));
            }
        }
    }

    entries.sort_by(|a, b| caseless_cmp(a.display_name(), b.display_name()));
    entries
}

/// Case-insensitive ordering on full Unicode lowercase forms.
fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::{Context, DivisionAge, DivisionType, Season};
    use crate::domain::ids::{ContextId, DivisionId, EditionId, RosterId, SeasonId, TeamId};
    use crate::domain::team::Roster;

    fn season() -> Season {
        Season {
            id: SeasonId(7),
            year: 2024,
            plus_one_year: false,
        }
    }

    fn division() -> Division {
        Division {
            id: DivisionId(1),
            division_age: DivisionAge::Regular,
            division_type: DivisionType::Open,
        }
    }

    fn edition() -> TournamentEdition {
        TournamentEdition {
            id: EditionId(1),
            name: "Open League".to_string(),
            season: season(),
            context: None,
        }
    }

    fn roster(id: i64, name_addition: Option<&str>) -> Roster {
        Roster {
            id: RosterId(id),
            season: season(),
            division_age: DivisionAge::Regular,
            division_type: DivisionType::Open,
            context: None,
            name_addition: name_addition.map(str::to_string),
            version: 1,
        }
    }

    fn team(id: i64, name: &str, rosters: Vec<Roster>) -> Team {
        Team {
            id: TeamId(id),
            name: name.to_string(),
            rosters,
        }
    }

    #[test]
    fn every_team_appears_once_as_base_entry() {
        let teams = vec![team(1, "Falcons", vec![]), team(2, "Eagles", vec![])];

        let entries = derive_entries(&teams, &division(), &edition());

        let base: Vec<&str> = entries
            .iter()
            .filter(|e| matches!(e, SelectableEntry::BaseTeam(_)))
            .map(SelectableEntry::display_name)
            .collect();
        assert_eq!(base, vec!["Eagles", "Falcons"]);
    }

    #[test]
    fn matching_base_roster_adds_no_duplicate_entry() {
        // A base roster that matches season and division is already
        // represented by the team entry itself.
        let teams = vec![team(1, "Falcons", vec![roster(10, None)])];

        let entries = derive_entries(&teams, &division(), &edition());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_name(), "Falcons");
    }

    #[test]
    fn named_roster_matching_all_criteria_becomes_sub_entry() {
        let teams = vec![team(1, "Falcons", vec![roster(10, Some("B"))])];

        let entries = derive_entries(&teams, &division(), &edition());

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].display_name(), "Falcons B");
        assert_eq!(entries[1].roster().map(|r| r.id), Some(RosterId(10)));
    }

    #[test]
    fn sub_entry_requires_matching_season() {
        let mut off_season = roster(10, Some("B"));
        off_season.season.id = SeasonId(99);
        let teams = vec![team(1, "Falcons", vec![off_season])];

        let entries = derive_entries(&teams, &division(), &edition());
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn sub_entry_requires_matching_division() {
        let mut women = roster(10, Some("B"));
        women.division_type = DivisionType::Women;
        let teams = vec![team(1, "Falcons", vec![women])];

        let entries = derive_entries(&teams, &division(), &edition());
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn sub_entry_requires_context_equivalence() {
        let mut league_bound = roster(10, Some("B"));
        league_bound.context = Some(Context {
            id: ContextId(5),
            acronym: "NE".to_string(),
        });
        let teams = vec![team(1, "Falcons", vec![league_bound])];

        // Edition has no context.
        let entries = derive_entries(&teams, &division(), &edition());
        assert_eq!(entries.len(), 1);

        // Same context id on both sides qualifies.
        let mut with_context = edition();
        with_context.context = Some(Context {
            id: ContextId(5),
            acronym: "NE".to_string(),
        });
        let entries = derive_entries(&teams, &division(), &with_context);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn combined_list_is_ordered_case_insensitively() {
        let teams = vec![
            team(1, "falcons", vec![roster(10, Some("B"))]),
            team(2, "Eagles", vec![]),
            team(3, "albatross", vec![]),
        ];

        let entries = derive_entries(&teams, &division(), &edition());

        let names: Vec<&str> = entries.iter().map(SelectableEntry::display_name).collect();
        assert_eq!(names, vec!["albatross", "Eagles", "falcons", "falcons B"]);
    }
}
