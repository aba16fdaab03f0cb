//! Vehicle Registry - Port to the remote vehicle registration service
//!
//! The local store is authoritative. The registry only mirrors the status
//! we push, and answers by-plate lookups on behalf of the caller.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::credential::BearerToken;
use crate::model::notification::VehicleStatus;
use crate::model::plate::Plate;

/// Vehicle data as returned by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryVehicle {
    pub id: u64,
    pub registration_number: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default, alias = "ownerJmbg")]
    pub owner_identifier: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Why a remote call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-2xx answer, status preserved
    Status(u16),
    /// Connection refused, DNS, reset
    Transport,
    Timeout,
    /// 2xx with a body we could not read
    Decode,
}

/// A failed remote call with enough detail to diagnose it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl RemoteFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self.kind {
            FailureKind::Status(code) => Some(code),
            _ => None,
        }
    }
}

impl core::fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            FailureKind::Status(code) => write!(f, "HTTP {}: {}", code, self.message),
            FailureKind::Transport => write!(f, "transport error: {}", self.message),
            FailureKind::Timeout => write!(f, "timed out: {}", self.message),
            FailureKind::Decode => write!(f, "invalid response body: {}", self.message),
        }
    }
}

impl std::error::Error for RemoteFailure {}

/// Result of a by-plate lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(RegistryVehicle),
    NotFound,
    /// The registry refused the forwarded credential
    Unauthorized,
    Failure(RemoteFailure),
}

/// Vehicle Registry Port
///
/// Implementations hold no state besides connection settings and never
/// retry. Every call is bounded by a transport timeout.
#[async_trait]
pub trait VehicleRegistry: Send + Sync {
    /// Push a status label for the plate
    async fn notify_status(&self, plate: &Plate, status: VehicleStatus)
        -> Result<(), RemoteFailure>;

    /// Look a vehicle up, forwarding the caller's credential
    async fn fetch_by_plate(&self, plate: &Plate, credential: &BearerToken) -> LookupOutcome;
}
