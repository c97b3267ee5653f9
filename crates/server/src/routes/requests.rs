use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use service::request_service;
use service::views::{CreatedRequest, RequestInput, RequestView};
use tracing::warn;

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    get, path = "/requests", tag = "requests",
    responses(
        (status = 200, description = "All requests", body = [crate::openapi::RequestDoc]),
        (status = 500, description = "Store read failed")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RequestView>>, ApiError> {
    request_service::list_requests(&state.db)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Failed to list requests"))
}

#[utoipa::path(
    post, path = "/requests", tag = "requests",
    request_body = crate::openapi::RequestInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CreatedRequestDoc),
        (status = 400, description = "Missing user or service"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RequestInput>, JsonRejection>,
) -> Result<Json<CreatedRequest>, ApiError> {
    let Json(input) = payload?;
    request_service::create_request(&state.db, input)
        .await
        .map(Json)
        .map_err(|e| {
            let err = ApiError::from_service(e, "Internal error while saving the request.");
            if err.status.is_client_error() {
                warn!(event = "request_rejected", reason = %err.message, "incomplete request body");
            }
            err
        })
}
