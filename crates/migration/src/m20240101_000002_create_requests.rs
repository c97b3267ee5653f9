//! Create `requests` table.
//! `service` is free text copied from the client; there is no foreign key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Requests::Table)
                    .if_not_exists()
                    .col(pk_auto(Requests::Id))
                    .col(text(Requests::User))
                    .col(text(Requests::Service))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Requests::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Requests {
    Table,
    Id,
    User,
    Service,
}
