//! Throwaway on-disk databases, one per caller.
use std::ops::Deref;

use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::db;

/// A connection to a database file that is removed when this value drops.
pub struct TestDb {
    conn: DatabaseConnection,
    _dir: TempDir,
}

impl TestDb {
    /// Owned handle for callers that keep the pool, e.g. router state.
    pub fn connection(&self) -> DatabaseConnection {
        self.conn.clone()
    }
}

impl Deref for TestDb {
    type Target = DatabaseConnection;

    fn deref(&self) -> &DatabaseConnection {
        &self.conn
    }
}

/// Config pointing at `services.db` inside a fresh temporary directory.
/// The directory lives as long as the returned guard.
pub fn temp_db_config() -> anyhow::Result<(DatabaseConfig, TempDir)> {
    let dir = tempfile::Builder::new().prefix("local-services-").tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("services.db").display()),
        ..Default::default()
    };
    Ok((cfg, dir))
}

pub async fn temp_db() -> anyhow::Result<TestDb> {
    let (cfg, dir) = temp_db_config()?;
    let conn = db::connect(&cfg).await?;
    let status = db::init(&conn).await;
    anyhow::ensure!(status.is_complete(), "schema bootstrap failed: {:?}", status.failed);
    Ok(TestDb { conn, _dir: dir })
}
