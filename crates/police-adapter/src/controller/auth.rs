//! Bearer gate
//!
//! Every /api/police route requires a non-empty bearer credential. The
//! token is not verified here; the vehicle registry checks it when a
//! lookup forwards it.

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use police_domain::BearerToken;
use tracing::debug;

use super::error::ApiError;

pub async fn require_bearer(request: Request, next: Next) -> Response {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if BearerToken::from_authorization(header).is_none() {
        debug!(path = %request.uri().path(), "Rejected request without bearer credential");
        return ApiError::MissingCredential("Authorization bearer token required".to_string())
            .into_response();
    }

    next.run(request).await
}
