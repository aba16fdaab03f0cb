use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use police_domain::{Accident, NewAccident};

use super::plate;
use crate::controller::dto::{CreateAccidentRequest, WriteResponse};
use crate::controller::error::ApiError;
use crate::controller::AppState;

/// POST /api/police/accidents
///
/// Answers 201 once the accident is stored, even when the registry could
/// not be told; the failure comes back as `warning`.
pub async fn report_accident(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAccidentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WriteResponse<Accident>>), ApiError> {
    let Json(request) = payload?;
    let (accident, outcome) = state
        .services
        .accidents
        .report(NewAccident::try_from(request)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(WriteResponse::new("Accident reported", accident).with_warning(outcome.warning())),
    ))
}

/// GET /api/police/accidents/plate/{plate}
pub async fn accidents_by_plate(
    State(state): State<Arc<AppState>>,
    path: Path<String>,
) -> Result<Json<Vec<Accident>>, ApiError> {
    let plate = plate(path)?;
    Ok(Json(state.services.accidents.by_plate(&plate).await?))
}
