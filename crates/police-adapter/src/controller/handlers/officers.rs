use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use police_domain::{NewOfficer, Officer};

use crate::controller::dto::{CreateOfficerRequest, WriteResponse};
use crate::controller::error::ApiError;
use crate::controller::AppState;

/// GET /api/police/officers
pub async fn list_officers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Officer>>, ApiError> {
    Ok(Json(state.services.officers.list().await?))
}

/// POST /api/police/officers
pub async fn create_officer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateOfficerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WriteResponse<Officer>>), ApiError> {
    let Json(request) = payload?;
    let officer = state
        .services
        .officers
        .create(NewOfficer::try_from(request)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(WriteResponse::new("Officer created", officer)),
    ))
}

/// GET /api/police/officers/{badge}
pub async fn officer_by_badge(
    State(state): State<Arc<AppState>>,
    Path(badge): Path<String>,
) -> Result<Json<Officer>, ApiError> {
    Ok(Json(state.services.officers.by_badge(&badge).await?))
}
