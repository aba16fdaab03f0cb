use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use police_domain::{NewViolation, Violation};

use super::{plate, record_id};
use crate::controller::dto::{CreateViolationRequest, WriteResponse};
use crate::controller::error::ApiError;
use crate::controller::AppState;

/// POST /api/police/violations
pub async fn issue_violation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateViolationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WriteResponse<Violation>>), ApiError> {
    let Json(request) = payload?;
    let violation = state
        .services
        .violations
        .issue(NewViolation::try_from(request)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(WriteResponse::new("Violation issued", violation)),
    ))
}

/// GET /api/police/violations/plate/{plate}
pub async fn violations_by_plate(
    State(state): State<Arc<AppState>>,
    path: Path<String>,
) -> Result<Json<Vec<Violation>>, ApiError> {
    let plate = plate(path)?;
    Ok(Json(state.services.violations.by_plate(&plate).await?))
}

/// PUT /api/police/violations/{id}/pay
pub async fn pay_violation(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<WriteResponse<Violation>>, ApiError> {
    let (violation, receipt) = state.services.violations.pay(record_id(path)?).await?;
    let warning = receipt.and_then(|r| r.warning());

    Ok(Json(
        WriteResponse::new("Violation paid", violation).with_warning(warning),
    ))
}

/// PUT /api/police/violations/{id}/dismiss
pub async fn dismiss_violation(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<WriteResponse<Violation>>, ApiError> {
    let violation = state.services.violations.dismiss(record_id(path)?).await?;
    Ok(Json(WriteResponse::new("Violation dismissed", violation)))
}
