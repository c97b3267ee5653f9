//! Create `services` table.
//! Location is stored as typed `address`/`lat`/`lon` columns; `location`
//! keeps the serialized composite of rows written in the old format.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(text(Services::Name))
                    .col(text_null(Services::Address))
                    .col(double_null(Services::Lat))
                    .col(double_null(Services::Lon))
                    .col(text_null(Services::Location))
                    .col(text(Services::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Name,
    Address,
    Lat,
    Lon,
    Location,
    Description,
}
