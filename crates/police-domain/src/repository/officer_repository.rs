//! Officer Repository - Police profiles keyed by badge number

use async_trait::async_trait;

use crate::model::officer::{NewOfficer, Officer};
use crate::repository::error::RepositoryError;

#[async_trait]
pub trait OfficerRepository: Send + Sync {
    /// Store a new officer; a duplicate badge number is a `Conflict`
    async fn create(&self, officer: NewOfficer) -> Result<Officer, RepositoryError>;

    /// All officers in id order
    async fn find_all(&self) -> Result<Vec<Officer>, RepositoryError>;

    async fn find_by_badge(&self, badge_number: &str) -> Result<Option<Officer>, RepositoryError>;
}
