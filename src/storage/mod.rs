// Storage port
// Contract for the remote data-access collaborator the dialog talks to

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::event::Division;
use crate::domain::registration::{Registration, RegistrationDraft};
use crate::domain::team::{Roster, RosterDraft, Team};

pub use http::{HttpStorage, HttpStorageConfig};

/// Errors surfaced by the storage collaborator
#[derive(Debug, Error)]
pub enum StorageError {
    /// HTTP 409: the entity already exists on the server.
    #[error("conflicting entity already exists: {0}")]
    Conflict(String),

    /// Any other non-success status the server answered with.
    #[error("server answered with status {status}")]
    Status { status: u16 },

    /// The request never completed (connection, TLS, decode, ...).
    #[error("transport error: {0}")]
    Transport(String),
}

impl StorageError {
    /// Whether this error denotes a duplicate-entity conflict
    /// (HTTP 409).
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::Conflict(_))
    }
}

/// Remote data-access collaborator
///
/// Defines the contract the registration dialog consumes.
/// Implementations handle transport-specific details.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetches the current user's teams with their nested rosters.
    async fn get_own_teams(&self) -> Result<Vec<Team>, StorageError>;

    /// Persists a new roster for the given team. Answers with the
    /// stored roster, its server-assigned id replacing the draft's
    /// placeholder.
    async fn save_roster(&self, draft: &RosterDraft, team: &Team) -> Result<Roster, StorageError>;

    /// Registers a team (via one of its rosters) for the division's
    /// edition.
    async fn register_team_for_edition(
        &self,
        draft: &RegistrationDraft,
        division: &Division,
    ) -> Result<Registration, StorageError>;
}
