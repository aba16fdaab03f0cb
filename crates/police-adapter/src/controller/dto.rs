//! Request and response bodies
//!
//! Requests are deserialized leniently (every field optional) and then
//! converted into validated drafts, so a missing field becomes a
//! `VALIDATION_ERROR` that names it rather than a JSON parse failure.

use chrono::{DateTime, Utc};
use police_domain::{
    AccidentSeverity, InvolvedPlates, NewAccident, NewOfficer, NewStolenReport, NewVehicleFlag,
    NewViolation, Plate, RecordId, ValidationError,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Envelope for every successful write
#[derive(Debug, Serialize)]
pub struct WriteResponse<T> {
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<T> WriteResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
            warning: None,
        }
    }

    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateOfficerRequest {
    pub badge_number: String,
    pub first_name: String,
    pub last_name: String,
    pub rank: String,
    pub station_id: String,
    pub user_id: String,
}

impl TryFrom<CreateOfficerRequest> for NewOfficer {
    type Error = ValidationError;

    fn try_from(req: CreateOfficerRequest) -> Result<Self, Self::Error> {
        Ok(NewOfficer::new(&req.badge_number)?
            .with_name(req.first_name, req.last_name)
            .with_rank(req.rank)
            .with_station(req.station_id)
            .with_user(req.user_id))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateViolationRequest {
    pub vehicle_plate: String,
    pub officer_id: Option<u64>,
    #[serde(rename = "type")]
    pub violation_type: String,
    pub description: String,
    pub location: String,
    pub fine_amount: Option<Decimal>,
    pub status: String,
    pub violation_date: Option<DateTime<Utc>>,
    pub offender_email: String,
}

impl TryFrom<CreateViolationRequest> for NewViolation {
    type Error = ValidationError;

    fn try_from(req: CreateViolationRequest) -> Result<Self, Self::Error> {
        let fine_amount = req.fine_amount.ok_or(ValidationError::MissingField {
            field: "fineAmount",
        })?;

        let mut violation = NewViolation::new(Plate::parse(&req.vehicle_plate)?, fine_amount)?
            .with_type(label_or_default(&req.violation_type)?)
            .with_status(label_or_default(&req.status)?)
            .with_description(req.description)
            .with_location(req.location)
            .with_offender_email(req.offender_email);

        if let Some(officer_id) = req.officer_id {
            violation = violation.with_officer(RecordId::new(officer_id));
        }
        if let Some(date) = req.violation_date {
            violation = violation.with_violation_date(date);
        }
        Ok(violation)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAccidentRequest {
    pub location: String,
    pub description: String,
    pub severity: String,
    pub accident_date: Option<DateTime<Utc>>,
    pub involved_plates: String,
    pub is_resolved: bool,
}

impl TryFrom<CreateAccidentRequest> for NewAccident {
    type Error = ValidationError;

    fn try_from(req: CreateAccidentRequest) -> Result<Self, Self::Error> {
        let mut accident = NewAccident::new(InvolvedPlates::parse(&req.involved_plates)?)
            .with_severity(label_or_default::<AccidentSeverity>(&req.severity)?)
            .with_location(req.location)
            .with_description(req.description)
            .resolved(req.is_resolved);

        if let Some(date) = req.accident_date {
            accident = accident.with_accident_date(date);
        }
        Ok(accident)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportStolenRequest {
    pub vehicle_plate: String,
    pub description: String,
    pub contact_info: String,
}

impl TryFrom<ReportStolenRequest> for NewStolenReport {
    type Error = ValidationError;

    fn try_from(req: ReportStolenRequest) -> Result<Self, Self::Error> {
        Ok(NewStolenReport::new(Plate::parse(&req.vehicle_plate)?)
            .with_description(req.description)
            .with_contact_info(req.contact_info))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddFlagRequest {
    pub vehicle_plate: String,
    pub flag_type: String,
    pub description: String,
}

impl TryFrom<AddFlagRequest> for NewVehicleFlag {
    type Error = ValidationError;

    fn try_from(req: AddFlagRequest) -> Result<Self, Self::Error> {
        Ok(NewVehicleFlag::new(Plate::parse(&req.vehicle_plate)?, &req.flag_type)?
            .with_description(req.description))
    }
}

/// Blank labels take the default, anything else must parse
fn label_or_default<T>(raw: &str) -> Result<T, ValidationError>
where
    T: FromStr<Err = ValidationError> + Default,
{
    let raw = raw.trim();
    if raw.is_empty() {
        Ok(T::default())
    } else {
        raw.parse()
    }
}
