//! Domain Models - The vocabulary of traffic policing
//!
//! Every stored record is created from a validated `New*` draft, so an
//! invalid enum label or an empty plate never reaches the store.

pub mod accident;
pub mod credential;
pub mod dossier;
pub mod error;
pub mod notification;
pub mod officer;
pub mod plate;
pub mod record;
pub mod stolen_vehicle;
pub mod vehicle_flag;
pub mod violation;
