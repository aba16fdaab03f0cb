//! StolenVehicle - A theft report for a plate
//!
//! At most one ACTIVE report per plate is authoritative for
//! "is this plate currently stolen". The store enforces that on create.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

use super::error::{TransitionError, ValidationError};
use super::plate::Plate;
use super::record::RecordId;

/// Whether the theft report is still open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StolenStatus {
    #[default]
    Active,
    Recovered,
}

impl StolenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StolenStatus::Active => "ACTIVE",
            StolenStatus::Recovered => "RECOVERED",
        }
    }
}

impl FromStr for StolenStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(StolenStatus::Active),
            "RECOVERED" => Ok(StolenStatus::Recovered),
            other => Err(ValidationError::InvalidEnum {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// A theft report that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStolenReport {
    pub plate: Plate,
    pub description: String,
    pub contact_info: String,
}

impl NewStolenReport {
    pub fn new(plate: Plate) -> Self {
        Self {
            plate,
            description: String::new(),
            contact_info: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_contact_info(mut self, contact_info: impl Into<String>) -> Self {
        self.contact_info = contact_info.into();
        self
    }
}

/// A stored theft report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StolenVehicle {
    pub id: RecordId,
    #[serde(rename = "vehiclePlate")]
    pub plate: Plate,
    pub reported_date: DateTime<Utc>,
    pub description: String,
    status: StolenStatus,
    pub contact_info: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StolenVehicle {
    /// Every new report starts ACTIVE and is dated now
    pub fn from_new(id: RecordId, new: NewStolenReport, now: DateTime<Utc>) -> Self {
        Self {
            id,
            plate: new.plate,
            reported_date: now,
            description: new.description,
            status: StolenStatus::Active,
            contact_info: new.contact_info,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self) -> StolenStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == StolenStatus::Active
    }

    // ========== State Transitions ==========

    pub fn transition_to(
        &mut self,
        next: StolenStatus,
        now: DateTime<Utc>,
    ) -> Result<(), TransitionError> {
        match (self.status, next) {
            (StolenStatus::Active, StolenStatus::Recovered) => {
                self.status = next;
                self.updated_at = now;
                Ok(())
            }
            (from, to) => Err(TransitionError::new(
                "stolen report",
                from.as_str(),
                to.as_str(),
            )),
        }
    }

    pub fn recover(&mut self, now: DateTime<Utc>) -> Result<(), TransitionError> {
        self.transition_to(StolenStatus::Recovered, now)
    }
}
