//! VehicleFlag - An alert attached to a plate ("WARRANT", "EXPIRED_REG")
//!
//! Flags are created active and only ever resolved, never deleted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::{required, ValidationError};
use super::plate::Plate;
use super::record::RecordId;

/// A flag that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicleFlag {
    pub plate: Plate,
    pub flag_type: String,
    pub description: String,
}

impl NewVehicleFlag {
    /// The flag type is a free-form label but must not be blank
    pub fn new(plate: Plate, flag_type: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            plate,
            flag_type: required("flagType", flag_type)?,
            description: String::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A stored vehicle flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleFlag {
    pub id: RecordId,
    #[serde(rename = "vehiclePlate")]
    pub plate: Plate,
    pub flag_type: String,
    pub description: String,
    is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VehicleFlag {
    pub fn from_new(id: RecordId, new: NewVehicleFlag, now: DateTime<Utc>) -> Self {
        Self {
            id,
            plate: new.plate,
            flag_type: new.flag_type,
            description: new.description,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Clear the flag. Resolving twice is a no-op.
    pub fn resolve(&mut self, now: DateTime<Utc>) {
        if self.is_active {
            self.is_active = false;
            self.updated_at = now;
        }
    }
}
