//! Vehicle flags

use std::sync::Arc;

use police_domain::{NewVehicleFlag, Plate, RecordId, VehicleFlag, VehicleFlagRepository};
use tracing::info;

use crate::error::ServiceError;

pub struct FlagService {
    flags: Arc<dyn VehicleFlagRepository>,
}

impl FlagService {
    pub fn new(flags: Arc<dyn VehicleFlagRepository>) -> Self {
        Self { flags }
    }

    pub async fn add(&self, flag: NewVehicleFlag) -> Result<VehicleFlag, ServiceError> {
        let flag = self.flags.create(flag).await?;
        info!(id = %flag.id, plate = %flag.plate, flag_type = %flag.flag_type, "Vehicle flagged");
        Ok(flag)
    }

    pub async fn active_by_plate(&self, plate: &Plate) -> Result<Vec<VehicleFlag>, ServiceError> {
        Ok(self.flags.find_active_by_plate(plate).await?)
    }

    /// Clear a flag; resolving an already cleared flag succeeds
    pub async fn resolve(&self, id: RecordId) -> Result<VehicleFlag, ServiceError> {
        let flag = self.flags.deactivate(id).await?;
        info!(id = %id, plate = %flag.plate, "Vehicle flag resolved");
        Ok(flag)
    }
}
