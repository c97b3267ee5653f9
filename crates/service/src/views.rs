//! Request bodies and response shapes.
//!
//! Responses use the Spanish keys the bundled front-end reads. Inputs accept
//! those keys as well as their English counterparts.

use models::{requests, services};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct ServiceInput {
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
    #[serde(default, alias = "direccion")]
    pub address: Option<String>,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RequestInput {
    #[serde(default, alias = "usuario")]
    pub user: Option<String>,
    #[serde(default, alias = "servicio")]
    pub service: Option<String>,
}

/// A service row with its location expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl From<services::Model> for ServiceView {
    fn from(row: services::Model) -> Self {
        let location = row.location();
        Self {
            id: row.id,
            name: row.name,
            address: location.address,
            lat: location.lat,
            lon: location.lon,
            description: row.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedService {
    pub id: i32,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatedService {
    pub message: String,
    #[serde(rename = "updatedID")]
    pub updated_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedService {
    pub message: String,
    #[serde(rename = "deletedID")]
    pub deleted_id: i32,
}

/// A stored request as listed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestView {
    pub id: i32,
    #[serde(rename = "usuario")]
    pub user: String,
    #[serde(rename = "servicio")]
    pub service: String,
}

impl From<requests::Model> for RequestView {
    fn from(row: requests::Model) -> Self {
        Self { id: row.id, user: row.user, service: row.service }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatedRequest {
    pub id: i32,
    pub message: String,
}
