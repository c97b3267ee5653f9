use common::GeocodeError;
use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("service {0} not found")]
    NotFound(String),
    #[error("no geocoding match for {0:?}")]
    GeocodeEmpty(String),
    #[error("geocoder error: {0}")]
    Geocoder(#[from] GeocodeError),
    #[error("database error: {0}")]
    Db(String),
    /// Insert statement succeeded without producing an id.
    #[error("silent insert failure: {0}")]
    SilentInsert(String),
}

impl ServiceError {
    pub fn not_found(id: impl ToString) -> Self { Self::NotFound(id.to_string()) }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Db(msg) => Self::Db(msg),
            e @ ModelError::NotInserted(_) => Self::SilentInsert(e.to_string()),
        }
    }
}
