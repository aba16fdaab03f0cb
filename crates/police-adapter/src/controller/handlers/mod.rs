//! HTTP handlers, one module per resource

pub mod accidents;
pub mod flags;
pub mod officers;
pub mod stolen;
pub mod vehicles;
pub mod violations;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::Json;
use police_domain::{Plate, RecordId};

use super::dto::HealthResponse;
use super::error::ApiError;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

pub(crate) fn record_id(path: Result<Path<u64>, PathRejection>) -> Result<RecordId, ApiError> {
    let Path(id) = path?;
    Ok(RecordId::new(id))
}

pub(crate) fn plate(path: Path<String>) -> Result<Plate, ApiError> {
    Ok(Plate::parse(&path.0)?)
}
