use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use police_domain::{NewStolenReport, StolenVehicle};

use super::record_id;
use crate::controller::dto::{ReportStolenRequest, WriteResponse};
use crate::controller::error::ApiError;
use crate::controller::AppState;

/// POST /api/police/stolen
pub async fn report_stolen(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReportStolenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WriteResponse<StolenVehicle>>), ApiError> {
    let Json(request) = payload?;
    let (report, handoff) = state
        .services
        .stolen
        .report(NewStolenReport::try_from(request)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(WriteResponse::new("Vehicle reported stolen", report).with_warning(handoff.warning())),
    ))
}

/// GET /api/police/stolen
pub async fn list_stolen(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StolenVehicle>>, ApiError> {
    Ok(Json(state.services.stolen.list().await?))
}

/// PUT /api/police/stolen/{id}/recover
pub async fn recover_stolen(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<WriteResponse<StolenVehicle>>, ApiError> {
    let (report, handoff) = state.services.stolen.recover(record_id(path)?).await?;
    Ok(Json(
        WriteResponse::new("Vehicle marked recovered", report).with_warning(handoff.warning()),
    ))
}
