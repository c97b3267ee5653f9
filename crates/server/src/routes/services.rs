use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use service::directory_service;
use service::views::{CreatedService, DeletedService, ServiceInput, ServiceView, UpdatedService};

use crate::{errors::ApiError, state::AppState};

/// Ids that are not integers cannot name a row.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse::<i32>().map_err(|_| ApiError::service_not_found(raw))
}

#[utoipa::path(
    get, path = "/services", tag = "services",
    responses(
        (status = 200, description = "All services with expanded location", body = [crate::openapi::ServiceDoc]),
        (status = 500, description = "Store read failed")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ServiceView>>, ApiError> {
    directory_service::list_services(&state.db)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Failed to list services"))
}

#[utoipa::path(
    post, path = "/services", tag = "services",
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CreatedServiceDoc),
        (status = 400, description = "Missing fields"),
        (status = 404, description = "Address not geocoded"),
        (status = 500, description = "Geocoder or store failure")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ServiceInput>, JsonRejection>,
) -> Result<Json<CreatedService>, ApiError> {
    let Json(input) = payload?;
    directory_service::create_service(&state.db, state.geocoder.as_ref(), input)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Internal error while processing the service."))
}

#[utoipa::path(
    put, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Missing fields"),
        (status = 404, description = "Service not found or address not geocoded"),
        (status = 500, description = "Geocoder or store failure")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ServiceInput>, JsonRejection>,
) -> Result<Json<UpdatedService>, ApiError> {
    let Json(input) = payload?;
    let id = parse_id(&id)?;
    directory_service::update_service(&state.db, state.geocoder.as_ref(), id, input)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Internal error while updating the service."))
}

#[utoipa::path(
    delete, path = "/services/{id}", tag = "services",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Service not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeletedService>, ApiError> {
    let id = parse_id(&id)?;
    directory_service::delete_service(&state.db, id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Failed to delete service"))
}
