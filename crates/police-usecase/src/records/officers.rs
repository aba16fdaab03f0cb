//! Officer profiles

use std::sync::Arc;

use police_domain::{NewOfficer, Officer, OfficerRepository};
use tracing::info;

use crate::error::ServiceError;

pub struct OfficerService {
    officers: Arc<dyn OfficerRepository>,
}

impl OfficerService {
    pub fn new(officers: Arc<dyn OfficerRepository>) -> Self {
        Self { officers }
    }

    /// Register an officer; a duplicate badge number is a conflict
    pub async fn create(&self, officer: NewOfficer) -> Result<Officer, ServiceError> {
        let officer = self.officers.create(officer).await?;
        info!(id = %officer.id, badge = %officer.badge_number, "Officer created");
        Ok(officer)
    }

    pub async fn list(&self) -> Result<Vec<Officer>, ServiceError> {
        Ok(self.officers.find_all().await?)
    }

    pub async fn by_badge(&self, badge_number: &str) -> Result<Officer, ServiceError> {
        self.officers
            .find_by_badge(badge_number)
            .await?
            .ok_or_else(|| ServiceError::not_found("Officer", badge_number))
    }
}
