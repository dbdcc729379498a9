/// Shared application state
use crate::services::AuthService;
use learntube_core::UserId;
use learntube_search::VideoSearch;
use learntube_storage::{Database, LocalStorageContext};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub auth_service: Arc<AuthService>,
    pub search: Arc<dyn VideoSearch>,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        auth_service: Arc<AuthService>,
        search: Arc<dyn VideoSearch>,
    ) -> Self {
        Self {
            db,
            auth_service,
            search,
        }
    }

    /// Storage context scoped to one authenticated user
    pub fn context(&self, user_id: &UserId) -> LocalStorageContext {
        self.db.context(user_id.clone())
    }
}
