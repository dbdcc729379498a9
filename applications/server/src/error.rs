/// Server error types
use crate::response::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use learntube_core::LearnTubeError;
use learntube_search::SearchError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Authorization failed: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Search failed: {0}")]
    Search(#[from] SearchError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Token encoding failure; rejected tokens are `Auth`
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<LearnTubeError> for ServerError {
    fn from(err: LearnTubeError) -> Self {
        match err {
            LearnTubeError::Validation(msg) => ServerError::Validation(msg),
            LearnTubeError::InvalidState(msg) => ServerError::InvalidState(msg),
            e @ (LearnTubeError::CapacityExceeded { .. }
            | LearnTubeError::DuplicateStep(_)
            | LearnTubeError::Duplicate(_)) => ServerError::Conflict(e.to_string()),
            e @ LearnTubeError::NotFound { .. } => ServerError::NotFound(e.to_string()),
            LearnTubeError::Unauthorized(msg) => ServerError::Unauthorized(msg),
            e @ (LearnTubeError::Storage(_)
            | LearnTubeError::Database(_)
            | LearnTubeError::Serialization(_)) => ServerError::Database(e.to_string()),
        }
    }
}

impl From<learntube_storage::StorageError> for ServerError {
    fn from(err: learntube_storage::StorageError) -> Self {
        // StorageError -> LearnTubeError -> ServerError
        LearnTubeError::from(err).into()
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) | ServerError::InvalidState(_) | ServerError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Auth(_) | ServerError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Conflict(_) => StatusCode::CONFLICT,
            ServerError::Search(_) => StatusCode::BAD_GATEWAY,
            ServerError::Database(_)
            | ServerError::Jwt(_)
            | ServerError::Config(_)
            | ServerError::Bcrypt(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ServerError::Auth(msg)
            | ServerError::Unauthorized(msg)
            | ServerError::NotFound(msg)
            | ServerError::BadRequest(msg)
            | ServerError::Validation(msg)
            | ServerError::InvalidState(msg)
            | ServerError::Conflict(msg) => msg,
            ServerError::Search(ref e) => {
                tracing::error!("Search error: {:?}", e);
                match e {
                    SearchError::MissingApiKey => "Video search is not configured".to_string(),
                    _ => "Video search failed".to_string(),
                }
            }
            ServerError::Jwt(ref e) => {
                tracing::error!("JWT error: {:?}", e);
                "Token error".to_string()
            }
            ServerError::Database(ref msg) => {
                tracing::error!("Database error: {}", msg);
                "Database error".to_string()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                "Configuration error".to_string()
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                "Password error".to_string()
            }
        };

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}
