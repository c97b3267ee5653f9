use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use tracing::error;

/// Error returned by every handler, rendered as `{"error": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn service_not_found(id: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("Service {id} not found"))
    }

    /// Map a service-layer error. Server-side failures answer with the
    /// generic `failure` text; their cause only goes to the log.
    pub fn from_service(err: ServiceError, failure: &'static str) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::bad_request(msg),
            ServiceError::NotFound(id) => Self::service_not_found(&id),
            ServiceError::GeocodeEmpty(_) => Self::new(
                StatusCode::NOT_FOUND,
                "Could not geocode the address. Please be more specific.",
            ),
            ServiceError::Geocoder(e) => {
                error!(event = "geocode_failed", error = %e, "{failure}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure)
            }
            ServiceError::Db(msg) => {
                error!(event = "store_error", error = %msg, "{failure}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure)
            }
            ServiceError::SilentInsert(msg) => {
                error!(event = "silent_insert_failure", error = %msg, "insert returned no id");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Could not confirm the insert in the database.")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
