//! Violation Repository - Abstract persistence for traffic tickets

use async_trait::async_trait;

use crate::model::plate::Plate;
use crate::model::record::RecordId;
use crate::model::violation::{NewViolation, Violation, ViolationStatus};
use crate::repository::error::RepositoryError;

/// Violation Repository Trait
///
/// This is a PORT in hexagonal architecture.
#[async_trait]
pub trait ViolationRepository: Send + Sync {
    async fn create(&self, violation: NewViolation) -> Result<Violation, RepositoryError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Violation>, RepositoryError>;

    /// Every violation for the plate, any status, in id order
    async fn find_by_plate(&self, plate: &Plate) -> Result<Vec<Violation>, RepositoryError>;

    async fn find_by_plate_and_status(
        &self,
        plate: &Plate,
        status: ViolationStatus,
    ) -> Result<Vec<Violation>, RepositoryError>;

    /// Apply a status transition atomically.
    ///
    /// `NotFound` when the id is unknown, `Transition` when the stored
    /// status does not allow the change.
    async fn update_status(
        &self,
        id: RecordId,
        status: ViolationStatus,
    ) -> Result<Violation, RepositoryError>;
}
