use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use police_domain::{NewVehicleFlag, VehicleFlag};

use super::{plate, record_id};
use crate::controller::dto::{AddFlagRequest, WriteResponse};
use crate::controller::error::ApiError;
use crate::controller::AppState;

/// POST /api/police/flags
pub async fn add_flag(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AddFlagRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WriteResponse<VehicleFlag>>), ApiError> {
    let Json(request) = payload?;
    let flag = state
        .services
        .flags
        .add(NewVehicleFlag::try_from(request)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(WriteResponse::new("Vehicle flag added", flag)),
    ))
}

/// GET /api/police/flags/{plate}
pub async fn active_flags(
    State(state): State<Arc<AppState>>,
    path: Path<String>,
) -> Result<Json<Vec<VehicleFlag>>, ApiError> {
    let plate = plate(path)?;
    Ok(Json(state.services.flags.active_by_plate(&plate).await?))
}

/// PUT /api/police/flags/{id}/resolve
pub async fn resolve_flag(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<WriteResponse<VehicleFlag>>, ApiError> {
    let flag = state.services.flags.resolve(record_id(path)?).await?;
    Ok(Json(WriteResponse::new("Vehicle flag resolved", flag)))
}
