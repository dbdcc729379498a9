//! Storage trait for user-scoped playlist documents

use crate::error::Result;
use crate::types::{CreatePlaylist, Playlist, PlaylistId, UserId};
use async_trait::async_trait;

/// Storage context bound to one authenticated user
///
/// Every lookup is filtered by [`StorageContext::user_id`]: a playlist owned by
/// someone else is indistinguishable from a missing one. Playlists are loaded
/// and saved as whole documents (roadmaps and videos included).
#[async_trait]
pub trait StorageContext: Send + Sync {
    /// Get the acting user ID
    fn user_id(&self) -> UserId;

    /// Get the user's playlists, most recently updated first
    async fn get_user_playlists(&self) -> Result<Vec<Playlist>>;

    /// Get an owned playlist with its full subtree
    async fn get_playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Create a new, empty playlist
    async fn create_playlist(&self, playlist: CreatePlaylist) -> Result<Playlist>;

    /// Replace an owned playlist document in one write
    ///
    /// Returns `NotFound` when no owned playlist with that id exists.
    async fn save_playlist(&self, playlist: &Playlist) -> Result<()>;

    /// Delete an owned playlist and everything it contains
    async fn delete_playlist(&self, id: &PlaylistId) -> Result<()>;
}
