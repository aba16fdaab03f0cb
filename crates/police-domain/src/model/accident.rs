//! Accident - A logged traffic accident
//!
//! An accident names every plate involved in one delimited field.
//! Severity defaults to MINOR.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

use super::error::ValidationError;
use super::plate::{InvolvedPlates, Plate, PlateMatch};
use super::record::RecordId;

/// How bad the accident was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccidentSeverity {
    #[default]
    Minor,
    Major,
    Critical,
    Fatal,
}

impl AccidentSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccidentSeverity::Minor => "MINOR",
            AccidentSeverity::Major => "MAJOR",
            AccidentSeverity::Critical => "CRITICAL",
            AccidentSeverity::Fatal => "FATAL",
        }
    }
}

impl FromStr for AccidentSeverity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MINOR" => Ok(AccidentSeverity::Minor),
            "MAJOR" => Ok(AccidentSeverity::Major),
            "CRITICAL" => Ok(AccidentSeverity::Critical),
            "FATAL" => Ok(AccidentSeverity::Fatal),
            other => Err(ValidationError::InvalidEnum {
                field: "severity",
                value: other.to_string(),
            }),
        }
    }
}

/// A validated accident report that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccident {
    pub involved_plates: InvolvedPlates,
    pub severity: AccidentSeverity,
    pub location: String,
    pub description: String,
    pub accident_date: Option<DateTime<Utc>>,
    pub is_resolved: bool,
}

impl NewAccident {
    pub fn new(involved_plates: InvolvedPlates) -> Self {
        Self {
            involved_plates,
            severity: AccidentSeverity::default(),
            location: String::new(),
            description: String::new(),
            accident_date: None,
            is_resolved: false,
        }
    }

    pub fn with_severity(mut self, severity: AccidentSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_accident_date(mut self, date: DateTime<Utc>) -> Self {
        self.accident_date = Some(date);
        self
    }

    pub fn resolved(mut self, is_resolved: bool) -> Self {
        self.is_resolved = is_resolved;
        self
    }
}

/// A stored accident record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Accident {
    pub id: RecordId,
    pub location: String,
    pub description: String,
    pub severity: AccidentSeverity,
    pub accident_date: DateTime<Utc>,
    pub involved_plates: InvolvedPlates,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Accident {
    pub fn from_new(id: RecordId, new: NewAccident, now: DateTime<Utc>) -> Self {
        Self {
            id,
            location: new.location,
            description: new.description,
            severity: new.severity,
            accident_date: new.accident_date.unwrap_or(now),
            involved_plates: new.involved_plates,
            is_resolved: new.is_resolved,
            created_at: now,
            updated_at: now,
        }
    }

    /// Does this accident involve `plate`?
    pub fn involves(&self, plate: &Plate, mode: PlateMatch) -> bool {
        self.involved_plates.contains(plate, mode)
    }
}
