//! Service errors surfaced to the HTTP layer

use police_domain::{RepositoryError, TransitionError, ValidationError};
use thiserror::Error;

/// Why a record operation failed.
///
/// Registry trouble never appears here: on write paths it is reported as a
/// warning next to the saved record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidTransition(TransitionError),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        ServiceError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { kind, id } => ServiceError::not_found(kind, id),
            RepositoryError::Conflict { message } => ServiceError::Conflict(message),
            RepositoryError::Transition(err) => ServiceError::InvalidTransition(err),
            RepositoryError::PersistenceError { message } => ServiceError::Storage(message),
        }
    }
}
