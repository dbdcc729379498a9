/// Storage-specific errors
use learntube_core::LearnTubeError;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violated
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Stored value could not be decoded
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    /// Rejected by a domain rule
    #[error(transparent)]
    Domain(#[from] LearnTubeError),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<StorageError> for LearnTubeError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => LearnTubeError::NotFound { entity, id },
            StorageError::Duplicate(msg) => LearnTubeError::Duplicate(msg),
            StorageError::Domain(e) => e,
            StorageError::Serialization(e) => LearnTubeError::Serialization(e),
            StorageError::Database(e) => LearnTubeError::Database(e.to_string()),
            other => LearnTubeError::storage(other.to_string()),
        }
    }
}
