use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Serialized `{address, lat, lon}` of rows written before the typed columns.
    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Address text plus the coordinates it geocoded to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(alias = "direccion")]
    pub address: String,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Decode the old single-column format. Anything unreadable becomes the
    /// raw text at 0,0 instead of an error.
    pub fn decode_legacy(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| Self {
            address: raw.to_string(),
            lat: 0.0,
            lon: 0.0,
        })
    }
}

impl Model {
    pub fn location(&self) -> Location {
        match (&self.address, self.lat, self.lon) {
            (Some(address), Some(lat), Some(lon)) => Location { address: address.clone(), lat, lon },
            _ => match &self.location {
                Some(raw) => Location::decode_legacy(raw),
                None => Location {
                    address: self.address.clone().unwrap_or_default(),
                    lat: self.lat.unwrap_or_default(),
                    lon: self.lon.unwrap_or_default(),
                },
            },
        }
    }
}

fn active_model(name: &str, location: &Location, description: &str) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        address: Set(Some(location.address.clone())),
        lat: Set(Some(location.lat)),
        lon: Set(Some(location.lon)),
        location: Set(None),
        description: Set(description.to_string()),
    }
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find().order_by_asc(Column::Id).all(db).await?;
    Ok(rows)
}

/// Insert a row and return its generated id.
pub async fn insert(
    db: &DatabaseConnection,
    name: &str,
    location: &Location,
    description: &str,
) -> Result<i32, ModelError> {
    let res = Entity::insert(active_model(name, location, description))
        .exec(db)
        .await
        .map_err(|e| ModelError::from_insert("services", e))?;
    if res.last_insert_id <= 0 {
        return Err(ModelError::NotInserted("services"));
    }
    Ok(res.last_insert_id)
}

/// Replace every field of row `id`. Returns rows affected; 0 means no such row.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    location: &Location,
    description: &str,
) -> Result<u64, ModelError> {
    let res = Entity::update_many()
        .set(active_model(name, location, description))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Delete row `id`. Returns rows affected; 0 means no such row.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
