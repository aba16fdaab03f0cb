//! Storage errors shared by every repository port

use crate::model::error::TransitionError;
use crate::model::record::RecordId;

/// Repository error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No record of this kind with that id
    NotFound { kind: &'static str, id: RecordId },
    /// A uniqueness rule would be broken (duplicate badge, second ACTIVE report)
    Conflict { message: String },
    /// The stored record's lifecycle refused the status change
    Transition(TransitionError),
    /// Failed to persist
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::NotFound { kind, id } => {
                write!(f, "{} not found: {}", kind, id)
            }
            RepositoryError::Conflict { message } => {
                write!(f, "Conflict: {}", message)
            }
            RepositoryError::Transition(err) => write!(f, "{}", err),
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<TransitionError> for RepositoryError {
    fn from(err: TransitionError) -> Self {
        RepositoryError::Transition(err)
    }
}
