//! Notification - What the registry is told after a local write

use serde::Serialize;

use super::accident::Accident;
use super::plate::Plate;
use super::stolen_vehicle::StolenVehicle;

/// Status label pushed to the vehicle registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleStatus {
    Stolen,
    Accident,
    Clear,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Stolen => "STOLEN",
            VehicleStatus::Accident => "ACCIDENT",
            VehicleStatus::Clear => "CLEAR",
        }
    }
}

impl core::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of an awaited registry notification.
///
/// Attached to a successful write as a non-fatal warning, never turned
/// into an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationOutcome {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl NotificationOutcome {
    pub fn delivered() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }

    // ========== Getters ==========

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Warning text for the caller, present only on failure
    pub fn warning(&self) -> Option<String> {
        if self.success {
            return None;
        }
        Some(format!(
            "Record saved, but the vehicle registry was not updated: {}",
            self.error.as_deref().unwrap_or("unknown error")
        ))
    }
}

/// A saved record that names the plates the registry must hear about
pub trait NotificationSubject {
    fn notification_plates(&self) -> Vec<Plate>;
}

impl NotificationSubject for StolenVehicle {
    fn notification_plates(&self) -> Vec<Plate> {
        vec![self.plate.clone()]
    }
}

impl NotificationSubject for Accident {
    fn notification_plates(&self) -> Vec<Plate> {
        self.involved_plates.plates()
    }
}
