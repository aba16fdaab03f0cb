//! # Traffic Police Domain Layer
//!
//! Records, validation rules and the ports the service talks through.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Records, value objects, dossier               ││
//! │  │  repository/- Storage ports (not implementations)           ││
//! │  │  gateway/   - Vehicle registry and mail ports               ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in here performs I/O. The local store is the system of record;
//! the vehicle registry is a secondary consumer reached through a port.

pub mod gateway;
pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    accident::{Accident, AccidentSeverity, NewAccident},
    credential::BearerToken,
    dossier::VehicleDossier,
    error::{TransitionError, ValidationError},
    notification::{NotificationOutcome, NotificationSubject, VehicleStatus},
    officer::{NewOfficer, Officer},
    plate::{InvolvedPlates, Plate, PlateMatch},
    record::RecordId,
    stolen_vehicle::{NewStolenReport, StolenStatus, StolenVehicle},
    vehicle_flag::{NewVehicleFlag, VehicleFlag},
    violation::{NewViolation, Violation, ViolationStatus, ViolationType},
};

pub use repository::{
    accident_repository::AccidentRepository,
    error::RepositoryError,
    officer_repository::OfficerRepository,
    stolen_vehicle_repository::StolenVehicleRepository,
    vehicle_flag_repository::VehicleFlagRepository,
    violation_repository::ViolationRepository,
    RecordStore,
};

pub use gateway::{
    mail_notifier::{MailMessage, MailNotifier},
    vehicle_registry::{FailureKind, LookupOutcome, RegistryVehicle, RemoteFailure, VehicleRegistry},
};
