/// Core error types for LearnTube
use thiserror::Error;

/// Result type alias using `LearnTubeError`
pub type Result<T> = std::result::Result<T, LearnTubeError>;

/// Core error type for LearnTube
///
/// Variants describe data-integrity and access failures only. Mapping them to
/// a transport status is left to the caller.
#[derive(Error, Debug)]
pub enum LearnTubeError {
    /// Input failed validation (title length, empty identifiers, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Progress value outside the three accepted literals
    #[error("Invalid progress state: {0}")]
    InvalidState(String),

    /// Roadmap already holds the maximum number of steps
    #[error("Roadmap already has the maximum of {max} steps")]
    CapacityExceeded { max: usize },

    /// Video already present in the roadmap
    #[error("Video already in roadmap: {0}")]
    DuplicateStep(String),

    /// Entity missing, or not owned by the acting user
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique value already taken (e.g. a registered email)
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Missing or invalid credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl LearnTubeError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an unauthorized error
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for LearnTubeError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
