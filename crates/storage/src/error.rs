use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Caller input rejected before any query was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No results found")]
    NotFound,

    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, StorageError::Validation(_))
    }
}
