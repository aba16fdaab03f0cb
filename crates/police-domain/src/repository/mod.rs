//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits say what the service needs from storage, not how it is
//! done. That's the adapter's job.
//!
//! ```text
//! Domain Layer              │  Adapter Layer
//! ──────────────────────────┼────────────────────────
//! trait ViolationRepository │  InMemoryRecordStore
//!   fn create()             │  (a SQL store would slot in here)
//!   fn find_by_plate()      │
//! ```
//!
//! Every port is async and `Send + Sync` so one handle can be shared by
//! every request task. Creates and status updates are atomic per row.

pub mod accident_repository;
pub mod error;
pub mod officer_repository;
pub mod stolen_vehicle_repository;
pub mod vehicle_flag_repository;
pub mod violation_repository;

use std::sync::Arc;

use accident_repository::AccidentRepository;
use officer_repository::OfficerRepository;
use stolen_vehicle_repository::StolenVehicleRepository;
use vehicle_flag_repository::VehicleFlagRepository;
use violation_repository::ViolationRepository;

/// The storage handle handed to every service at construction
#[derive(Clone)]
pub struct RecordStore {
    pub officers: Arc<dyn OfficerRepository>,
    pub violations: Arc<dyn ViolationRepository>,
    pub accidents: Arc<dyn AccidentRepository>,
    pub stolen: Arc<dyn StolenVehicleRepository>,
    pub flags: Arc<dyn VehicleFlagRepository>,
}

impl RecordStore {
    /// Use one backend for every record kind
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: OfficerRepository
            + ViolationRepository
            + AccidentRepository
            + StolenVehicleRepository
            + VehicleFlagRepository
            + 'static,
    {
        Self {
            officers: backend.clone(),
            violations: backend.clone(),
            accidents: backend.clone(),
            stolen: backend.clone(),
            flags: backend,
        }
    }
}
