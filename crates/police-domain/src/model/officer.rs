//! Officer - A police profile, distinct from an auth-service user

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::{required, ValidationError};
use super::record::RecordId;

/// An officer profile that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOfficer {
    pub badge_number: String,
    pub first_name: String,
    pub last_name: String,
    pub rank: String,
    pub station_id: String,
    pub user_id: String,
}

impl NewOfficer {
    /// The badge number is required and unique across officers
    pub fn new(badge_number: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            badge_number: required("badgeNumber", badge_number)?,
            ..Default::default()
        })
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn with_rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }

    pub fn with_station(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = station_id.into();
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }
}

/// A stored officer profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Officer {
    pub id: RecordId,
    pub badge_number: String,
    pub first_name: String,
    pub last_name: String,
    pub rank: String,
    pub station_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Officer {
    pub fn from_new(id: RecordId, new: NewOfficer, now: DateTime<Utc>) -> Self {
        Self {
            id,
            badge_number: new.badge_number,
            first_name: new.first_name,
            last_name: new.last_name,
            rank: new.rank,
            station_id: new.station_id,
            user_id: new.user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
