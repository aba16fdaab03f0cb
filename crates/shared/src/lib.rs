//! # Traffic Police Shared
//!
//! Configuration and error types used across the service crates.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
