//! Gateway Traits - Remote services the police service talks to
//!
//! ```text
//! usecase ──► VehicleRegistry ──► vehicle registry (status push, lookup)
//!         └─► MailNotifier    ──► notification service (email)
//! ```

pub mod mail_notifier;
pub mod vehicle_registry;
