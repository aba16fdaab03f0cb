//! Accidents - Reported with an awaited registry notification

use std::sync::Arc;

use police_domain::{
    Accident, AccidentRepository, NewAccident, NotificationOutcome, Plate, PlateMatch,
    VehicleStatus,
};
use tracing::info;

use crate::coordinator::WriteThenNotify;
use crate::error::ServiceError;

pub struct AccidentService {
    accidents: Arc<dyn AccidentRepository>,
    coordinator: Arc<WriteThenNotify>,
    plate_match: PlateMatch,
}

impl AccidentService {
    pub fn new(
        accidents: Arc<dyn AccidentRepository>,
        coordinator: Arc<WriteThenNotify>,
        plate_match: PlateMatch,
    ) -> Self {
        Self {
            accidents,
            coordinator,
            plate_match,
        }
    }

    /// Store the accident, then mark every involved plate ACCIDENT
    pub async fn report(
        &self,
        accident: NewAccident,
    ) -> Result<(Accident, NotificationOutcome), ServiceError> {
        let (accident, outcome) = self
            .coordinator
            .commit_with_notification(self.accidents.create(accident), VehicleStatus::Accident)
            .await?;

        info!(
            id = %accident.id,
            plates = %accident.involved_plates.as_str(),
            severity = accident.severity.as_str(),
            notified = outcome.is_success(),
            "Accident reported"
        );
        Ok((accident, outcome))
    }

    /// Accidents involving the plate, matched like the dossier count
    pub async fn by_plate(&self, plate: &Plate) -> Result<Vec<Accident>, ServiceError> {
        Ok(self.accidents.find_involving(plate, self.plate_match).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::NotificationDispatcher;
    use crate::test_support::{plate, FixtureStore, RecordingRegistry};
    use police_domain::InvolvedPlates;

    fn service(registry: Arc<RecordingRegistry>, store: FixtureStore) -> AccidentService {
        let (dispatcher, _worker) = NotificationDispatcher::new(4);
        let coordinator = Arc::new(WriteThenNotify::new(registry, dispatcher));
        AccidentService::new(store.into_store().accidents, coordinator, PlateMatch::Token)
    }

    fn draft(involved: &str) -> NewAccident {
        NewAccident::new(InvolvedPlates::parse(involved).unwrap())
    }

    #[tokio::test]
    async fn test_report_with_failed_notification_is_saved() {
        let registry = Arc::new(RecordingRegistry::failing_notifications(500));
        let service = service(registry.clone(), FixtureStore::default());

        let (accident, outcome) = service.report(draft("BG-123")).await.unwrap();
        assert!(outcome.warning().is_some());
        assert_eq!(service.by_plate(&plate("BG-123")).await.unwrap(), vec![accident]);
    }

    #[tokio::test]
    async fn test_storage_failure_skips_registry() {
        let registry = Arc::new(RecordingRegistry::default());
        let service = service(registry.clone(), FixtureStore::failing(&["accidents"]));

        let err = service.report(draft("BG-123,NS-456")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
        assert!(registry.notified().is_empty());
    }

    #[tokio::test]
    async fn test_by_plate_uses_configured_policy() {
        let service = service(Arc::new(RecordingRegistry::default()), FixtureStore::default());
        service.report(draft("BG-123,NS-456")).await.unwrap();

        assert_eq!(service.by_plate(&plate("NS-456")).await.unwrap().len(), 1);
        assert!(service.by_plate(&plate("BG-12")).await.unwrap().is_empty());
    }
}
