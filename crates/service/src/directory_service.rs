use common::{Coordinates, Geocoder};
use models::services::{self, Location};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::ServiceError;
use crate::validation::require;
use crate::views::{CreatedService, DeletedService, ServiceInput, ServiceView, UpdatedService};

/// Validated fields of a service body.
struct ServiceFields {
    name: String,
    address: String,
    description: String,
}

fn validate(input: ServiceInput) -> Result<ServiceFields, ServiceError> {
    let [name, address, description] = require([
        ("name", input.name),
        ("address", input.address),
        ("description", input.description),
    ])?;
    Ok(ServiceFields { name, address, description })
}

async fn locate(geocoder: &dyn Geocoder, address: &str) -> Result<Coordinates, ServiceError> {
    geocoder
        .geocode(address)
        .await?
        .ok_or_else(|| ServiceError::GeocodeEmpty(address.to_string()))
}

/// List every service with its location expanded.
pub async fn list_services(db: &DatabaseConnection) -> Result<Vec<ServiceView>, ServiceError> {
    let rows = services::list(db).await?;
    Ok(rows.into_iter().map(ServiceView::from).collect())
}

/// Validate, geocode the address, then insert.
pub async fn create_service(
    db: &DatabaseConnection,
    geocoder: &dyn Geocoder,
    input: ServiceInput,
) -> Result<CreatedService, ServiceError> {
    let fields = validate(input)?;
    let Coordinates { lat, lon } = locate(geocoder, &fields.address).await?;
    let location = Location { address: fields.address, lat, lon };
    let id = services::insert(db, &fields.name, &location, &fields.description).await?;
    info!(id, name = %fields.name, lat, lon, "created service");
    Ok(CreatedService { id, lat, lon })
}

/// Replace every field of service `id`. The address is always geocoded again.
pub async fn update_service(
    db: &DatabaseConnection,
    geocoder: &dyn Geocoder,
    id: i32,
    input: ServiceInput,
) -> Result<UpdatedService, ServiceError> {
    let fields = validate(input)?;
    let Coordinates { lat, lon } = locate(geocoder, &fields.address).await?;
    let location = Location { address: fields.address, lat, lon };
    let affected = services::update(db, id, &fields.name, &location, &fields.description).await?;
    if affected == 0 {
        return Err(ServiceError::not_found(id));
    }
    info!(id, lat, lon, "updated service");
    Ok(UpdatedService { message: format!("Service with ID {id} updated."), updated_id: id })
}

/// Delete service `id`.
pub async fn delete_service(db: &DatabaseConnection, id: i32) -> Result<DeletedService, ServiceError> {
    if services::delete(db, id).await? == 0 {
        return Err(ServiceError::not_found(id));
    }
    info!(id, "deleted service");
    Ok(DeletedService { message: format!("Service with ID {id} deleted."), deleted_id: id })
}
