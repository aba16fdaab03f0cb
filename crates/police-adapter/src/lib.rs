//! # Traffic Police Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapter (axum HTTP API)
//! - `gateway/` - Outbound adapters (vehicle registry, notification service)
//! - `repository/` - Persistence implementations

pub mod controller;
pub mod gateway;
pub mod repository;

pub use controller::{create_router, AppState};
pub use gateway::{GatewayError, HttpMailNotifier, HttpVehicleRegistry};
pub use repository::in_memory::InMemoryRecordStore;
