//! Error Types for the Product Store

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Store unreachable (no connection, offline build, etc.)
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Query ran but failed or returned a record we can't read
    #[error("Query failed: {0}")]
    Query(String),

    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Check if the failure is a connectivity problem rather than a bad query
    pub fn is_unavailable(&self) -> bool {
        match self {
            StoreError::Unavailable(_) => true,
            StoreError::Query(_) => false,
            #[cfg(feature = "postgres")]
            StoreError::Database(err) => matches!(
                err,
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Configuration(_)
            ),
        }
    }
}
