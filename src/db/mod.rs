pub mod comment;
pub mod product;

/// Storage failures, split the way the HTTP layer reports them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unique constraint violated: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Error::Conflict(db_err.message().to_string())
            }
            err => Error::Database(err),
        }
    }
}
