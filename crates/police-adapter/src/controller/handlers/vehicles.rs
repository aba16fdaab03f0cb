use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap},
    Json,
};
use police_domain::{RegistryVehicle, VehicleDossier};

use super::plate;
use crate::controller::error::ApiError;
use crate::controller::AppState;

/// GET /api/police/status/{plate}
///
/// Always 200; an unknown plate yields an all-clear dossier.
pub async fn vehicle_status(
    State(state): State<Arc<AppState>>,
    path: Path<String>,
) -> Result<Json<VehicleDossier>, ApiError> {
    let plate = plate(path)?;
    Ok(Json(state.services.dossier.build_dossier(&plate).await))
}

/// GET /api/police/vehicles/plate/{plate}
///
/// Forwards the caller's credential to the vehicle registry.
pub async fn lookup_vehicle(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    path: Path<String>,
) -> Result<Json<RegistryVehicle>, ApiError> {
    let plate = plate(path)?;
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    let vehicle = state
        .services
        .lookup
        .lookup_vehicle(&plate, authorization)
        .await?;
    Ok(Json(vehicle))
}
