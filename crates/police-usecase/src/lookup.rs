//! Authenticated Proxy - Vehicle lookup on behalf of the caller
//!
//! The caller's bearer token is forwarded unchanged. Without one the
//! registry is never contacted.

use std::sync::Arc;

use police_domain::{BearerToken, LookupOutcome, Plate, RegistryVehicle, VehicleRegistry};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Missing bearer credential")]
    MissingCredential,

    #[error("Vehicle not found: {plate}")]
    NotFound { plate: String },

    #[error("Vehicle registry rejected the forwarded credentials")]
    UpstreamRejectedCredentials,

    #[error("Vehicle registry unavailable: {detail}")]
    UpstreamUnavailable { detail: String },
}

pub struct VehicleLookup {
    registry: Arc<dyn VehicleRegistry>,
}

impl VehicleLookup {
    pub fn new(registry: Arc<dyn VehicleRegistry>) -> Self {
        Self { registry }
    }

    /// Look up `plate` with the raw Authorization header of the caller
    pub async fn lookup_vehicle(
        &self,
        plate: &Plate,
        authorization: Option<&str>,
    ) -> Result<RegistryVehicle, LookupError> {
        let credential =
            BearerToken::from_authorization(authorization).ok_or(LookupError::MissingCredential)?;

        match self.registry.fetch_by_plate(plate, &credential).await {
            LookupOutcome::Found(vehicle) => {
                debug!(plate = %plate, "Vehicle found in registry");
                Ok(vehicle)
            }
            LookupOutcome::NotFound => Err(LookupError::NotFound {
                plate: plate.to_string(),
            }),
            LookupOutcome::Unauthorized => {
                warn!(plate = %plate, "Registry rejected forwarded credentials");
                Err(LookupError::UpstreamRejectedCredentials)
            }
            LookupOutcome::Failure(failure) => {
                warn!(plate = %plate, error = %failure, "Registry lookup failed");
                Err(LookupError::UpstreamUnavailable {
                    detail: failure.to_string(),
                })
            }
        }
    }
}
