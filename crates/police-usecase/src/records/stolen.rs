//! Stolen vehicles - Reports and recoveries with detached notifications

use std::sync::Arc;

use police_domain::{
    NewStolenReport, RecordId, StolenStatus, StolenVehicle, StolenVehicleRepository,
    VehicleStatus,
};
use tracing::info;

use crate::coordinator::WriteThenNotify;
use crate::dispatcher::DetachedNotification;
use crate::error::ServiceError;

pub struct StolenVehicleService {
    stolen: Arc<dyn StolenVehicleRepository>,
    coordinator: Arc<WriteThenNotify>,
}

impl StolenVehicleService {
    pub fn new(stolen: Arc<dyn StolenVehicleRepository>, coordinator: Arc<WriteThenNotify>) -> Self {
        Self { stolen, coordinator }
    }

    /// File an ACTIVE report, then queue a STOLEN status for the registry.
    ///
    /// A second ACTIVE report for the same plate is a conflict.
    pub async fn report(
        &self,
        report: NewStolenReport,
    ) -> Result<(StolenVehicle, DetachedNotification), ServiceError> {
        let (report, handoff) = self
            .coordinator
            .commit_with_detached_notification(self.stolen.create(report), VehicleStatus::Stolen)
            .await?;
        info!(id = %report.id, plate = %report.plate, "Vehicle reported stolen");
        Ok((report, handoff))
    }

    pub async fn list(&self) -> Result<Vec<StolenVehicle>, ServiceError> {
        Ok(self.stolen.find_all().await?)
    }

    /// Close a report, then queue a CLEAR status for the registry
    pub async fn recover(
        &self,
        id: RecordId,
    ) -> Result<(StolenVehicle, DetachedNotification), ServiceError> {
        let (report, handoff) = self
            .coordinator
            .commit_with_detached_notification(
                self.stolen.update_status(id, StolenStatus::Recovered),
                VehicleStatus::Clear,
            )
            .await?;
        info!(id = %id, plate = %report.plate, "Stolen vehicle recovered");
        Ok((report, handoff))
    }
}
