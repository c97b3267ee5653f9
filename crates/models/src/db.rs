use std::time::Duration;

use configs::DatabaseConfig;
use migration::{MigratorTrait, SchemaManager};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{error, info};

/// Outcome of the startup schema pass, by migration name.
#[derive(Debug, Default)]
pub struct SchemaStatus {
    pub ready: Vec<String>,
    pub failed: Vec<String>,
}

impl SchemaStatus {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    Ok(db)
}

/// Ensure both tables exist. Each table is created independently; a failure
/// is logged and the remaining tables are still attempted.
pub async fn init(db: &DatabaseConnection) -> SchemaStatus {
    let manager = SchemaManager::new(db);
    let mut status = SchemaStatus::default();
    for migration in migration::Migrator::migrations() {
        let name = migration.name().to_string();
        match migration.up(&manager).await {
            Ok(()) => {
                info!(event = "schema_ready", migration = %name, "table verified/created");
                status.ready.push(name);
            }
            Err(e) => {
                error!(event = "schema_failed", migration = %name, error = %e, "table creation failed; continuing");
                status.failed.push(name);
            }
        }
    }
    status
}

/// Connect and bootstrap the schema.
pub async fn open(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect(cfg).await?;
    info!(event = "db_connected", url = %cfg.url, "connected to sqlite store");
    init(&db).await;
    Ok(db)
}
