use thiserror::Error;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors surfaced by the access layer
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// A lookup by id matched no row
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The request was rejected before any write happened
    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl DirectoryError {
    pub fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
