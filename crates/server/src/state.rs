use std::sync::Arc;

use common::Geocoder;
use sea_orm::DatabaseConnection;

/// Everything a handler needs. The store connection is opened once at
/// startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { db, geocoder }
    }
}
