//! Schema for the directory's two tables.
//!
//! Every migration uses `IF NOT EXISTS` so the set can be replayed on each
//! start; the store applies them one by one so that a failure on one table
//! does not block the other.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_services;
mod m20240101_000002_create_requests;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_services::Migration),
            Box::new(m20240101_000002_create_requests::Migration),
        ]
    }
}
