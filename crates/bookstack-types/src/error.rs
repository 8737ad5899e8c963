use thiserror::Error;

/// Errors related to book operations.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("Book with ID {0} not found")]
    NotFound(i64),

    #[error("ISBN '{0}' already exists")]
    IsbnConflict(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from repository operations (used by trait definitions in bookstack-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}
