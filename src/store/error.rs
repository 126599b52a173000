use thiserror::Error;

/// Result type for message store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the message store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The connection handle was never established
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Connection error - database unreachable, bad configuration or authentication failure
    #[error("Connection error: {0}")]
    Connection(String),

    /// Pool error - no connection could be checked out
    #[error("Pool error: {0}")]
    Pool(String),

    /// Database error - SQL errors, constraint violations
    #[error("Database error: {0}")]
    Database(String),
}

impl StoreError {
    /// Whether this error means the store was never reachable, as opposed to a failed operation
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

/// Convert tokio-postgres errors to store errors
impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            return StoreError::Database(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        StoreError::Database(format!("{:?}", err))
    }
}

impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::Pool(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for StoreError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        StoreError::Connection(err.to_string())
    }
}
