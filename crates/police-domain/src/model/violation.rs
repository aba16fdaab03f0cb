//! Violation - A traffic ticket issued against a plate
//!
//! Only PENDING violations count towards the fines a plate owes.
//! A violation leaves PENDING exactly once: it is paid or dismissed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use super::error::{TransitionError, ValidationError};
use super::plate::Plate;
use super::record::RecordId;

/// Payment status of a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationStatus {
    #[default]
    Pending,
    Paid,
    Dismissed,
}

impl ViolationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationStatus::Pending => "PENDING",
            ViolationStatus::Paid => "PAID",
            ViolationStatus::Dismissed => "DISMISSED",
        }
    }
}

impl FromStr for ViolationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(ViolationStatus::Pending),
            "PAID" => Ok(ViolationStatus::Paid),
            "DISMISSED" => Ok(ViolationStatus::Dismissed),
            other => Err(ValidationError::InvalidEnum {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

impl core::fmt::Display for ViolationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of offence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ViolationType {
    #[serde(rename = "SPEEDING")]
    Speeding,
    #[serde(rename = "PARKING")]
    Parking,
    /// Driving under influence
    #[serde(rename = "DUI")]
    Dui,
    #[serde(rename = "RED_LIGHT")]
    RedLight,
    #[serde(rename = "EXPIRED_DOCS")]
    ExpiredDocs,
    /// Fallback when no type is given
    #[default]
    #[serde(rename = "RECKLESS_DRIVING")]
    RecklessDriving,
}

impl ViolationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationType::Speeding => "SPEEDING",
            ViolationType::Parking => "PARKING",
            ViolationType::Dui => "DUI",
            ViolationType::RedLight => "RED_LIGHT",
            ViolationType::ExpiredDocs => "EXPIRED_DOCS",
            ViolationType::RecklessDriving => "RECKLESS_DRIVING",
        }
    }
}

impl FromStr for ViolationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SPEEDING" => Ok(ViolationType::Speeding),
            "PARKING" => Ok(ViolationType::Parking),
            "DUI" => Ok(ViolationType::Dui),
            "RED_LIGHT" => Ok(ViolationType::RedLight),
            "EXPIRED_DOCS" => Ok(ViolationType::ExpiredDocs),
            "RECKLESS_DRIVING" => Ok(ViolationType::RecklessDriving),
            other => Err(ValidationError::InvalidEnum {
                field: "type",
                value: other.to_string(),
            }),
        }
    }
}

/// Largest fine a single violation may carry
pub const MAX_FINE_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// A validated violation that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewViolation {
    pub plate: Plate,
    pub officer_id: Option<RecordId>,
    pub violation_type: ViolationType,
    pub description: String,
    pub location: String,
    pub fine_amount: Decimal,
    pub status: ViolationStatus,
    pub violation_date: Option<DateTime<Utc>>,
    pub offender_email: Option<String>,
}

impl NewViolation {
    /// Create a PENDING violation; the fine must lie in `0..=MAX_FINE_AMOUNT`
    pub fn new(plate: Plate, fine_amount: Decimal) -> Result<Self, ValidationError> {
        if fine_amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount {
                field: "fineAmount",
            });
        }
        if fine_amount > MAX_FINE_AMOUNT {
            return Err(ValidationError::AmountTooLarge {
                field: "fineAmount",
                max: MAX_FINE_AMOUNT,
            });
        }
        Ok(Self {
            plate,
            officer_id: None,
            violation_type: ViolationType::default(),
            description: String::new(),
            location: String::new(),
            fine_amount,
            status: ViolationStatus::Pending,
            violation_date: None,
            offender_email: None,
        })
    }

    pub fn with_type(mut self, violation_type: ViolationType) -> Self {
        self.violation_type = violation_type;
        self
    }

    pub fn with_status(mut self, status: ViolationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_officer(mut self, officer_id: RecordId) -> Self {
        self.officer_id = Some(officer_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_violation_date(mut self, date: DateTime<Utc>) -> Self {
        self.violation_date = Some(date);
        self
    }

    /// Blank addresses are dropped
    pub fn with_offender_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        let email = email.trim();
        self.offender_email = (!email.is_empty()).then(|| email.to_string());
        self
    }
}

/// A stored traffic violation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub id: RecordId,
    #[serde(rename = "vehiclePlate")]
    pub plate: Plate,
    pub officer_id: Option<RecordId>,
    #[serde(rename = "type")]
    pub violation_type: ViolationType,
    pub description: String,
    pub location: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub fine_amount: Decimal,
    status: ViolationStatus,
    pub violation_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offender_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Violation {
    /// Materialize a draft with its store-assigned identity
    pub fn from_new(id: RecordId, new: NewViolation, now: DateTime<Utc>) -> Self {
        Self {
            id,
            plate: new.plate,
            officer_id: new.officer_id,
            violation_type: new.violation_type,
            description: new.description,
            location: new.location,
            fine_amount: new.fine_amount,
            status: new.status,
            violation_date: new.violation_date.unwrap_or(now),
            offender_email: new.offender_email,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self) -> ViolationStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == ViolationStatus::Pending
    }

    // ========== State Transitions ==========

    /// Move out of PENDING into PAID or DISMISSED
    pub fn transition_to(
        &mut self,
        next: ViolationStatus,
        now: DateTime<Utc>,
    ) -> Result<(), TransitionError> {
        match (self.status, next) {
            (ViolationStatus::Pending, ViolationStatus::Paid)
            | (ViolationStatus::Pending, ViolationStatus::Dismissed) => {
                self.status = next;
                self.updated_at = now;
                Ok(())
            }
            (from, to) => Err(TransitionError::new("violation", from.as_str(), to.as_str())),
        }
    }

    pub fn pay(&mut self, now: DateTime<Utc>) -> Result<(), TransitionError> {
        self.transition_to(ViolationStatus::Paid, now)
    }

    pub fn dismiss(&mut self, now: DateTime<Utc>) -> Result<(), TransitionError> {
        self.transition_to(ViolationStatus::Dismissed, now)
    }
}
