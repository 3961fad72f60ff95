use std::time::Duration;

use async_trait::async_trait;

use crate::domain::event::Division;
use crate::domain::registration::{Registration, RegistrationDraft};
use crate::domain::team::{Roster, RosterDraft, Team};
use crate::storage::{Storage, StorageError};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the HTTP storage adapter
#[derive(Debug, Clone)]
pub struct HttpStorageConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout applied by the underlying client.
    pub request_timeout: Duration,
}

impl Default for HttpStorageConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl HttpStorageConfig {
    /// Reads the configuration from the environment.
    ///
    /// `STORAGE_BASE_URL` selects the backend; when unset a local
    /// default is used and a warning is logged.
    pub fn from_env() -> Self {
        let base_url = std::env::var("STORAGE_BASE_URL").unwrap_or_else(|_| {
            tracing::warn!("STORAGE_BASE_URL not set, using default");
            DEFAULT_BASE_URL.to_string()
        });

        Self {
            base_url,
            ..Self::default()
        }
    }
}

/// HTTP implementation of [`Storage`]
///
/// Talks JSON to the backend API using reqwest. Wire shapes follow the
/// backend's camelCase contract; a 409 answer on roster creation is
/// mapped to [`StorageError::Conflict`].
pub struct HttpStorage {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStorage {
    /// Creates a new HttpStorage from the given configuration.
    pub fn new(config: HttpStorageConfig) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Maps a non-success response to a storage error, draining the
    /// body for the conflict message the server sends along.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == reqwest::StatusCode::CONFLICT {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(%message, "server reported a conflict");
            return Err(StorageError::Conflict(message));
        }

        Err(StorageError::Status {
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl Storage for HttpStorage {
    async fn get_own_teams(&self) -> Result<Vec<Team>, StorageError> {
        tracing::debug!("fetching own teams");

        let response = self
            .client
            .get(self.url("teams/own"))
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))
    }

    async fn save_roster(&self, draft: &RosterDraft, team: &Team) -> Result<Roster, StorageError> {
        tracing::debug!(team = %team.id, "creating roster");

        let response = self
            .client
            .post(self.url("roster"))
            .json(draft)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))
    }

    async fn register_team_for_edition(
        &self,
        draft: &RegistrationDraft,
        division: &Division,
    ) -> Result<Registration, StorageError> {
        tracing::debug!(division = %division.id, team = %draft.team.id, "registering team");

        let response = self
            .client
            .post(self.url(&format!("divisions/{}/registration", division.id)))
            .json(draft)
            .send()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| StorageError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let storage = HttpStorage::new(HttpStorageConfig {
            base_url: "http://example.org/api/".to_string(),
            ..HttpStorageConfig::default()
        })
        .unwrap();

        assert_eq!(storage.url("teams/own"), "http://example.org/api/teams/own");
        assert_eq!(storage.url("/roster"), "http://example.org/api/roster");
    }
}
