//! Dossier Aggregator - One plate, four concurrent queries
//!
//! The queries run together and take no lock, so the dossier is a
//! point-in-time approximation. A failing query contributes an empty value.

use police_domain::{
    Plate, PlateMatch, RecordStore, RepositoryError, VehicleDossier, ViolationStatus,
};
use tracing::{debug, warn};

pub struct DossierAggregator {
    store: RecordStore,
    plate_match: PlateMatch,
}

impl DossierAggregator {
    pub fn new(store: RecordStore, plate_match: PlateMatch) -> Self {
        Self { store, plate_match }
    }

    pub fn plate_match(&self) -> PlateMatch {
        self.plate_match
    }

    /// Build the dossier for `plate`. Never fails.
    pub async fn build_dossier(&self, plate: &Plate) -> VehicleDossier {
        let (stolen, flags, violations, accident_count) = tokio::join!(
            self.store.stolen.find_active_by_plate(plate),
            self.store.flags.find_active_by_plate(plate),
            self.store
                .violations
                .find_by_plate_and_status(plate, ViolationStatus::Pending),
            self.store.accidents.count_involving(plate, self.plate_match),
        );

        let dossier = VehicleDossier::assemble(
            plate.clone(),
            or_empty(plate, "stolen report", stolen),
            or_empty(plate, "active flags", flags),
            or_empty(plate, "unpaid violations", violations),
            or_empty(plate, "accident count", accident_count),
        );

        debug!(
            plate = %plate,
            is_stolen = dossier.is_stolen(),
            accidents = dossier.accident_count(),
            "Dossier built"
        );
        dossier
    }
}

fn or_empty<T: Default>(plate: &Plate, query: &'static str, result: Result<T, RepositoryError>) -> T {
    result.unwrap_or_else(|err| {
        warn!(plate = %plate, query, error = %err, "Dossier query failed, treating as empty");
        T::default()
    })
}
