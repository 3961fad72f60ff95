// Registration dialog module
// Form state, eligibility derivation and submission for registering a
// team into a division of an event edition

pub mod eligibility;
pub mod selection;
pub mod submit;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::alert::Alerter;
use crate::domain::event::{Division, Event};
use crate::domain::ids::DivisionId;
use crate::domain::team::Team;
use crate::storage::{Storage, StorageError};

pub use selection::SelectableEntry;
pub use submit::SubmitError;

const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared submission-in-flight flags
///
/// Handed to whichever UI regions need to observe the dialog's
/// submission state; clones observe the same underlying flags.
/// `pending` means a submission is running, `disabled` means
/// submission controls should be inert — the dialog keeps the two in
/// lockstep but exposes both because other surfaces read them
/// independently.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlags {
    inner: Arc<FlagsInner>,
}

#[derive(Debug, Default)]
struct FlagsInner {
    pending: AtomicBool,
    disabled: AtomicBool,
}

impl SubmissionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a submission is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.inner.pending.load(Ordering::SeqCst)
    }

    /// Whether submission controls should be inert.
    pub fn is_disabled(&self) -> bool {
        self.inner.disabled.load(Ordering::SeqCst)
    }

    pub(crate) fn begin(&self) {
        self.inner.pending.store(true, Ordering::SeqCst);
        self.inner.disabled.store(true, Ordering::SeqCst);
    }

    pub(crate) fn clear(&self) {
        self.inner.pending.store(false, Ordering::SeqCst);
        self.inner.disabled.store(false, Ordering::SeqCst);
    }
}

/// Hosting dialog surface
///
/// The dialog core only ever asks to be dismissed; the host owns the
/// rest of the dialog lifecycle.
pub trait DialogHost: Send + Sync {
    fn request_close(&self);
}

/// The team registration dialog core.
///
/// Holds the transient form state, keeps the list of selectable teams
/// and sub-rosters in sync with the chosen division, and runs the
/// two-step submission against the storage collaborator.
pub struct RegistrationDialog {
    event: Event,
    teams: Vec<Team>,
    entries: Vec<SelectableEntry>,
    division: Option<DivisionId>,
    selected: Option<usize>,
    comment: String,
    creating_new_roster: bool,
    name_addition: String,
    flags: SubmissionFlags,
    storage: Arc<dyn Storage>,
    alerter: Arc<dyn Alerter>,
    host: Arc<dyn DialogHost>,
    cancel: CancellationToken,
    submit_timeout: Duration,
}

impl RegistrationDialog {
    /// Opens the dialog for an event: loads the user's teams from
    /// storage, defaults the division to the event's first one and
    /// derives the initial selection list.
    pub async fn open(
        event: Event,
        storage: Arc<dyn Storage>,
        alerter: Arc<dyn Alerter>,
        host: Arc<dyn DialogHost>,
        flags: SubmissionFlags,
    ) -> Result<Self, StorageError> {
        let teams = storage.get_own_teams().await?;
        tracing::debug!(teams = teams.len(), event = %event.display_name(), "dialog opened");

        let mut dialog = Self {
            division: event.divisions.first().map(|division| division.id),
            event,
            teams,
            entries: Vec::new(),
            selected: None,
            comment: String::new(),
            creating_new_roster: false,
            name_addition: String::new(),
            flags,
            storage,
            alerter,
            host,
            cancel: CancellationToken::new(),
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
        };
        dialog.rederive();
        Ok(dialog)
    }

    /// Switches the target division and recomputes the selection list.
    /// The previous team choice is discarded and the first entry of
    /// the new list pre-selected; comment and toggle state stay as
    /// they are. Ids not offered by the event are ignored.
    pub fn change_division(&mut self, id: DivisionId) {
        if self.event.division(id).is_none() {
            tracing::debug!(division = %id, "ignoring unknown division");
            return;
        }
        self.division = Some(id);
        self.rederive();
    }

    fn rederive(&mut self) {
        self.entries = match self.current_division() {
            Some(division) => {
                eligibility::derive_entries(&self.teams, division, &self.event.edition)
            }
            None => Vec::new(),
        };
        self.selected = if self.entries.is_empty() { None } else { Some(0) };
    }

    fn current_division(&self) -> Option<&Division> {
        self.division.and_then(|id| self.event.division(id))
    }

    /// Selects an entry of the current list by position. Out-of-range
    /// indices leave the selection unchanged.
    pub fn select_entry(&mut self, index: usize) {
        if index < self.entries.len() {
            self.selected = Some(index);
        }
    }

    /// Turns on creation of a new named sub-roster.
    pub fn start_new_roster(&mut self) {
        self.creating_new_roster = true;
    }

    /// Turns new-roster creation back off and clears the entered name
    /// addition. The team selection is untouched.
    pub fn cancel_new_roster(&mut self) {
        self.creating_new_roster = false;
        self.name_addition.clear();
    }

    pub fn set_name_addition(&mut self, text: impl Into<String>) {
        self.name_addition = text.into();
    }

    pub fn set_comment(&mut self, text: impl Into<String>) {
        self.comment = text.into();
    }

    /// Overrides the per-call timeout applied to both remote
    /// submission steps.
    pub fn set_submit_timeout(&mut self, timeout: Duration) {
        self.submit_timeout = timeout;
    }

    // ===== Accessors for the rendering layer =====

    /// The title to show: event name for single events, edition name
    /// otherwise.
    pub fn event_name(&self) -> &str {
        self.event.display_name()
    }

    /// The ordered list of selectable teams and sub-rosters for the
    /// current division.
    pub fn entries(&self) -> &[SelectableEntry] {
        &self.entries
    }

    /// The currently selected entry, if the list is non-empty.
    pub fn selected_entry(&self) -> Option<&SelectableEntry> {
        self.selected.and_then(|index| self.entries.get(index))
    }

    /// The team behind the current selection, regardless of whether a
    /// base entry or a sub-roster entry is selected.
    pub fn selected_team(&self) -> Option<&Team> {
        self.selected_entry().map(SelectableEntry::team)
    }

    /// The currently targeted division.
    pub fn division(&self) -> Option<&Division> {
        self.current_division()
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn is_creating_new_roster(&self) -> bool {
        self.creating_new_roster
    }

    pub fn name_addition(&self) -> &str {
        &self.name_addition
    }

    /// The shared submission flags this dialog drives.
    pub fn flags(&self) -> &SubmissionFlags {
        &self.flags
    }

    /// Token the host can cancel when the user navigates away, so a
    /// late-arriving response is discarded instead of acted upon.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}
