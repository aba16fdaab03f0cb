//! Stolen Vehicle Repository - Theft reports
//!
//! The store owns the "one ACTIVE report per plate" rule: the check and
//! the insert happen under the same lock (or transaction).

use async_trait::async_trait;

use crate::model::plate::Plate;
use crate::model::record::RecordId;
use crate::model::stolen_vehicle::{NewStolenReport, StolenStatus, StolenVehicle};
use crate::repository::error::RepositoryError;

#[async_trait]
pub trait StolenVehicleRepository: Send + Sync {
    /// Store a new ACTIVE report; `Conflict` if the plate already has one
    async fn create(&self, report: NewStolenReport) -> Result<StolenVehicle, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<StolenVehicle>, RepositoryError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<StolenVehicle>, RepositoryError>;

    async fn find_active_by_plate(
        &self,
        plate: &Plate,
    ) -> Result<Option<StolenVehicle>, RepositoryError>;

    async fn update_status(
        &self,
        id: RecordId,
        status: StolenStatus,
    ) -> Result<StolenVehicle, RepositoryError>;
}
