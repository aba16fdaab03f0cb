//! # Traffic Police Use Case Layer
//!
//! Orchestrates the flow between the local store and the remote services.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  records/      - CRUD services per record kind                   │
//! │  coordinator   - persist first, then tell the vehicle registry   │
//! │  dispatcher    - bounded queue for fire-and-forget notifications │
//! │  dossier       - concurrent per-plate aggregation                │
//! │  lookup        - authenticated pass-through to the registry      │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

pub mod coordinator;
pub mod dispatcher;
pub mod dossier;
pub mod error;
pub mod lookup;
pub mod records;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use police_domain::{PlateMatch, RecordStore, VehicleRegistry};

pub use coordinator::WriteThenNotify;
pub use dispatcher::{DetachedNotification, NotificationDispatcher, NotificationJob, NotificationWorker};
pub use dossier::DossierAggregator;
pub use error::ServiceError;
pub use lookup::{LookupError, VehicleLookup};
pub use records::{
    accidents::AccidentService, flags::FlagService, officers::OfficerService,
    stolen::StolenVehicleService, violations::ViolationService,
};

pub use police_domain;

/// Every service the HTTP layer needs, wired to one store and one registry
#[derive(Clone)]
pub struct PoliceServices {
    pub officers: Arc<OfficerService>,
    pub violations: Arc<ViolationService>,
    pub accidents: Arc<AccidentService>,
    pub stolen: Arc<StolenVehicleService>,
    pub flags: Arc<FlagService>,
    pub dossier: Arc<DossierAggregator>,
    pub lookup: Arc<VehicleLookup>,
}

impl PoliceServices {
    pub fn new(
        store: RecordStore,
        registry: Arc<dyn VehicleRegistry>,
        dispatcher: NotificationDispatcher,
        plate_match: PlateMatch,
    ) -> Self {
        let coordinator = Arc::new(WriteThenNotify::new(registry.clone(), dispatcher.clone()));

        Self {
            officers: Arc::new(OfficerService::new(store.officers.clone())),
            violations: Arc::new(ViolationService::new(store.violations.clone(), dispatcher)),
            accidents: Arc::new(AccidentService::new(
                store.accidents.clone(),
                coordinator.clone(),
                plate_match,
            )),
            stolen: Arc::new(StolenVehicleService::new(store.stolen.clone(), coordinator)),
            flags: Arc::new(FlagService::new(store.flags.clone())),
            dossier: Arc::new(DossierAggregator::new(store, plate_match)),
            lookup: Arc::new(VehicleLookup::new(registry)),
        }
    }
}
