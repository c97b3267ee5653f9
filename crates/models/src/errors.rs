use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("database error: {0}")]
    Db(String),
    /// The statement ran but the driver reported no new row.
    #[error("insert into {0} reported no new row")]
    NotInserted(&'static str),
}

impl ModelError {
    pub(crate) fn from_insert(table: &'static str, err: DbErr) -> Self {
        match err {
            DbErr::RecordNotInserted => Self::NotInserted(table),
            other => Self::Db(other.to_string()),
        }
    }
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        Self::Db(err.to_string())
    }
}
