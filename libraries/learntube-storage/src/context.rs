use crate::playlists;
use async_trait::async_trait;
use learntube_core::{error::Result, storage::StorageContext, types::*};
use sqlx::SqlitePool;

/// Local storage context using `SQLite`, scoped to one user
pub struct LocalStorageContext {
    pool: SqlitePool,
    user_id: UserId,
}

impl LocalStorageContext {
    pub fn new(pool: SqlitePool, user_id: UserId) -> Self {
        Self { pool, user_id }
    }
}

#[async_trait]
impl StorageContext for LocalStorageContext {
    fn user_id(&self) -> UserId {
        self.user_id.clone()
    }

    async fn get_user_playlists(&self) -> Result<Vec<Playlist>> {
        Ok(playlists::get_user_playlists(&self.pool, &self.user_id).await?)
    }

    async fn get_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        Ok(playlists::get_by_id(&self.pool, id, &self.user_id).await?)
    }

    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist> {
        if playlist.user_id != self.user_id {
            return Err(learntube_core::LearnTubeError::unauthorized(
                "Cannot create a playlist for another user",
            ));
        }
        Ok(playlists::create(&self.pool, playlist).await?)
    }

    async fn save_playlist(&self, playlist: &Playlist) -> Result<()> {
        if !playlist.is_owned_by(&self.user_id) {
            return Err(learntube_core::LearnTubeError::not_found(
                "Playlist",
                playlist.id.as_str(),
            ));
        }
        Ok(playlists::save(&self.pool, playlist).await?)
    }

    async fn delete_playlist(&self, id: &PlaylistId) -> Result<()> {
        Ok(playlists::delete(&self.pool, id, &self.user_id).await?)
    }
}
