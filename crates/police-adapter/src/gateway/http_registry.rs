//! HttpVehicleRegistry - reqwest client for the vehicle registry
//!
//! ```text
//! notify_status  ──► POST {base}/api/vehicles/update-status  {vehiclePlate, status}
//! fetch_by_plate ──► GET  {base}/api/vehicles/plate/{plate}  Authorization: Bearer …
//!                   ◄── 200 {message, data: {id, registrationNumber, …}}
//! ```
//!
//! Paths resolve below the base URL, so `http://gw/registry` keeps its
//! `/registry` prefix.

use std::time::Duration;

use async_trait::async_trait;
use police_domain::{
    BearerToken, FailureKind, LookupOutcome, Plate, RegistryVehicle, RemoteFailure,
    VehicleRegistry, VehicleStatus,
};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    build_client, endpoint, parse_base_url, status_failure, transport_failure, GatewayError,
};

const STATUS_UPDATE_PATH: &str = "/api/vehicles/update-status";
const LOOKUP_PATH: &str = "/api/vehicles/plate";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusUpdateBody<'a> {
    vehicle_plate: &'a str,
    status: VehicleStatus,
}

/// Body of a successful lookup
#[derive(Deserialize)]
struct LookupEnvelope {
    #[serde(default)]
    message: String,
    data: RegistryVehicle,
}

#[derive(Debug, Clone)]
pub struct HttpVehicleRegistry {
    client: reqwest::Client,
    base_url: Url,
    status_path: String,
    lookup_path: String,
}

impl HttpVehicleRegistry {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: parse_base_url(base_url)?,
            status_path: STATUS_UPDATE_PATH.to_string(),
            lookup_path: LOOKUP_PATH.to_string(),
        })
    }

    pub fn with_status_path(mut self, path: impl Into<String>) -> Self {
        self.status_path = path.into();
        self
    }

    pub fn with_lookup_path(mut self, path: impl Into<String>) -> Self {
        self.lookup_path = path.into();
        self
    }

    fn endpoint(&self, path: &str) -> Result<Url, RemoteFailure> {
        endpoint(&self.base_url, path)
    }

    /// Lookup URL with the plate as one percent-encoded path segment
    fn lookup_url(&self, plate: &Plate) -> Result<Url, RemoteFailure> {
        let mut url = self.endpoint(&self.lookup_path)?;
        url.path_segments_mut()
            .map_err(|_| {
                RemoteFailure::new(FailureKind::Transport, "registry URL cannot take a path")
            })?
            .pop_if_empty()
            .push(plate.as_str());
        Ok(url)
    }
}

#[async_trait]
impl VehicleRegistry for HttpVehicleRegistry {
    async fn notify_status(
        &self,
        plate: &Plate,
        status: VehicleStatus,
    ) -> Result<(), RemoteFailure> {
        let url = self.endpoint(&self.status_path)?;
        let body = StatusUpdateBody {
            vehicle_plate: plate.as_str(),
            status,
        };

        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_failure(&e))?;

        if response.status().is_success() {
            debug!(plate = %plate, status = %status, "Registry accepted status update");
            Ok(())
        } else {
            Err(status_failure(response).await)
        }
    }

    async fn fetch_by_plate(&self, plate: &Plate, credential: &BearerToken) -> LookupOutcome {
        let url = match self.lookup_url(plate) {
            Ok(url) => url,
            Err(failure) => return LookupOutcome::Failure(failure),
        };

        let response = match self
            .client
            .get(url)
            .bearer_auth(credential.as_str())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return LookupOutcome::Failure(transport_failure(&e)),
        };

        match response.status() {
            StatusCode::NOT_FOUND => LookupOutcome::NotFound,
            StatusCode::UNAUTHORIZED => LookupOutcome::Unauthorized,
            status if status.is_success() => match response.json::<LookupEnvelope>().await {
                Ok(envelope) => {
                    debug!(plate = %plate, message = %envelope.message, "Registry found vehicle");
                    LookupOutcome::Found(envelope.data)
                }
                Err(e) if e.is_timeout() => LookupOutcome::Failure(transport_failure(&e)),
                Err(e) => LookupOutcome::Failure(RemoteFailure::new(FailureKind::Decode, e.to_string())),
            },
            _ => LookupOutcome::Failure(status_failure(response).await),
        }
    }
}
