use models::requests;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::ServiceError;
use crate::validation::require;
use crate::views::{CreatedRequest, RequestInput, RequestView};

pub async fn list_requests(db: &DatabaseConnection) -> Result<Vec<RequestView>, ServiceError> {
    let rows = requests::list(db).await?;
    Ok(rows.into_iter().map(RequestView::from).collect())
}

/// Record a request. `service` is stored as given, without checking it names
/// an existing listing.
pub async fn create_request(db: &DatabaseConnection, input: RequestInput) -> Result<CreatedRequest, ServiceError> {
    let [user, service] = require([("user", input.user), ("service", input.service)])?;
    let id = requests::insert(db, &user, &service).await?;
    info!(id, %user, %service, "created request");
    Ok(CreatedRequest { id, message: "Request added successfully".to_string() })
}
