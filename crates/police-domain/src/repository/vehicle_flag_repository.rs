//! Vehicle Flag Repository

use async_trait::async_trait;

use crate::model::plate::Plate;
use crate::model::record::RecordId;
use crate::model::vehicle_flag::{NewVehicleFlag, VehicleFlag};
use crate::repository::error::RepositoryError;

#[async_trait]
pub trait VehicleFlagRepository: Send + Sync {
    async fn create(&self, flag: NewVehicleFlag) -> Result<VehicleFlag, RepositoryError>;

    async fn find_by_id(&self, id: RecordId) -> Result<Option<VehicleFlag>, RepositoryError>;

    /// Active flags only, in id order
    async fn find_active_by_plate(&self, plate: &Plate)
        -> Result<Vec<VehicleFlag>, RepositoryError>;

    /// Mark the flag inactive; resolving an inactive flag is a no-op
    async fn deactivate(&self, id: RecordId) -> Result<VehicleFlag, RepositoryError>;
}
