//! Event Registration Library
//!
//! Core of the dialog that lets a team captain register one of their
//! teams, or a named sub-roster, into a division of an event edition:
//! deriving the eligible teams for a division, holding the form state,
//! and running the two-step submission (ensure roster exists, then
//! register) against the remote storage collaborator.

pub mod alert;
pub mod dialog;
pub mod domain;
pub mod storage;

pub use alert::{AlertOptions, Alerter, TracingAlerter};
pub use dialog::{DialogHost, RegistrationDialog, SelectableEntry, SubmissionFlags, SubmitError};
pub use storage::{HttpStorage, HttpStorageConfig, Storage, StorageError};
