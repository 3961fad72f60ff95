use std::future::Future;

use thiserror::Error;

use crate::alert::AlertOptions;
use crate::dialog::{RegistrationDialog, SelectableEntry};
use crate::domain::registration::{CompletedRegistration, RegistrationDraft};
use crate::domain::team::{Roster, RosterDraft};
use crate::storage::StorageError;

const ALERT_CONTAINER: &str = "#event-registration-error";
const ALERT_DURATION_SECS: u32 = 10;

const KEY_NAME_ADDITION_EMPTY: &str = "event.register.nameAdditionEmpty";
const KEY_ROSTER_DUPLICATED: &str = "event.register.rosterDuplicated";

fn dialog_alert() -> AlertOptions {
    AlertOptions {
        container: ALERT_CONTAINER,
        duration_secs: ALERT_DURATION_SECS,
    }
}

/// Ways a submission attempt can end short of a completed
/// registration. Every variant leaves the submission flags cleared and
/// the dialog open; a fresh user-initiated attempt is always possible.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The event offers no division, or the chosen one disappeared
    /// from its division list.
    #[error("no division available to register for")]
    NoDivisionSelected,

    /// The selectable list was empty, so no team could be chosen.
    #[error("no team selected")]
    NoTeamSelected,

    /// New-roster mode was active with a blank name addition; detected
    /// before any network call.
    #[error("a name addition is required to create a new roster")]
    NameAdditionEmpty,

    /// Creating the missing roster failed; registration was not
    /// attempted.
    #[error("roster creation failed")]
    RosterCreation(#[source] StorageError),

    /// The registration call itself failed.
    #[error("registration failed")]
    Registration(#[source] StorageError),

    /// The host cancelled the operation (e.g. the user navigated
    /// away); any late response is discarded.
    #[error("submission cancelled")]
    Cancelled,

    /// A remote call did not answer within the configured timeout.
    #[error("no response from the server in time")]
    TimedOut,
}

impl RegistrationDialog {
    /// Submits the registration: resolves or creates the roster, then
    /// registers the selected team for the edition.
    ///
    /// Sets the shared pending/disabled flags for the whole attempt
    /// and clears them on every outcome. On success the hosting dialog
    /// is asked to close and the registration is returned with team
    /// and roster attached for immediate display.
    pub async fn submit(&mut self) -> Result<CompletedRegistration, SubmitError> {
        self.flags.begin();
        let outcome = self.run_submission().await;
        self.flags.clear();

        if outcome.is_ok() {
            self.host.request_close();
        }
        outcome
    }

    async fn run_submission(&self) -> Result<CompletedRegistration, SubmitError> {
        // Step 1: resolve an existing roster or create the missing one.
        // Blank-name validation runs before anything else.
        let new_name_addition = if self.creating_new_roster {
            let text = self.name_addition.trim();
            if text.is_empty() {
                self.alerter
                    .error("", KEY_NAME_ADDITION_EMPTY, &dialog_alert());
                return Err(SubmitError::NameAdditionEmpty);
            }
            Some(text.to_string())
        } else {
            None
        };

        let division = self
            .current_division()
            .ok_or(SubmitError::NoDivisionSelected)?;
        let entry = self.selected_entry().ok_or(SubmitError::NoTeamSelected)?;
        let team = entry.team();
        let edition = &self.event.edition;

        let existing: Option<Roster> = if self.creating_new_roster {
            None
        } else {
            match entry {
                SelectableEntry::NamedRoster { roster, .. } => Some(roster.clone()),
                SelectableEntry::BaseTeam(team) => {
                    team.base_roster_for(division, edition).cloned()
                }
            }
        };

        let roster = match existing {
            Some(roster) => roster,
            None => {
                let draft = RosterDraft::new(team, division, edition, new_name_addition);
                match self.guarded(self.storage.save_roster(&draft, team)).await? {
                    Ok(roster) => roster,
                    Err(error) => {
                        if error.is_conflict() {
                            self.alerter
                                .error("", KEY_ROSTER_DUPLICATED, &dialog_alert());
                        }
                        return Err(SubmitError::RosterCreation(error));
                    }
                }
            }
        };

        // Step 2: register, re-resolving the division from the event's
        // list rather than trusting the held reference.
        let division = self
            .event
            .division(division.id)
            .ok_or(SubmitError::NoDivisionSelected)?;
        let draft = RegistrationDraft::new(Some(self.comment.as_str()), team, &roster);

        let registration = self
            .guarded(self.storage.register_team_for_edition(&draft, division))
            .await?
            .map_err(SubmitError::Registration)?;

        tracing::info!(
            team = %team.name,
            division = %division.id,
            registration = %registration.id,
            "team registered"
        );

        Ok(CompletedRegistration {
            registration,
            team: team.clone(),
            roster,
        })
    }

    /// Runs one remote call under the dialog's cancellation token and
    /// submit timeout. The outer error ends the whole attempt without
    /// acting on whatever the storage call might still produce; the
    /// inner result is the storage outcome itself.
    async fn guarded<T>(
        &self,
        call: impl Future<Output = Result<T, StorageError>>,
    ) -> Result<Result<T, StorageError>, SubmitError> {
        tokio::select! {
            _ = self.cancel.cancelled() => Err(SubmitError::Cancelled),
            outcome = tokio::time::timeout(self.submit_timeout, call) => {
                outcome.map_err(|_| SubmitError::TimedOut)
            }
        }
    }
}
