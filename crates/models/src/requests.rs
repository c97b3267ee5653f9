use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub user: String,
    /// Free-text service name as submitted; not a reference to `services`.
    #[sea_orm(column_type = "Text")]
    pub service: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find().order_by_asc(Column::Id).all(db).await?;
    Ok(rows)
}

/// Insert a request and return its generated id.
pub async fn insert(db: &DatabaseConnection, user: &str, service: &str) -> Result<i32, ModelError> {
    let am = ActiveModel {
        id: NotSet,
        user: Set(user.to_string()),
        service: Set(service.to_string()),
    };
    let res = Entity::insert(am)
        .exec(db)
        .await
        .map_err(|e| ModelError::from_insert("requests", e))?;
    if res.last_insert_id <= 0 {
        return Err(ModelError::NotInserted("requests"));
    }
    Ok(res.last_insert_id)
}
