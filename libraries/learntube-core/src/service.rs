//! Owner-scoped playlist operations
//!
//! Each mutation loads one playlist document through the user's
//! [`StorageContext`], applies a single change, and saves the whole document
//! back. The updated playlist is returned so callers do not need to re-read it.

use crate::aggregator::{self, PlaylistStats, UserStats};
use crate::error::{LearnTubeError, Result};
use crate::storage::StorageContext;
use crate::types::{
    validate_playlist_title, validate_roadmap_title, CreatePlaylist, NewVideo, Playlist,
    PlaylistId, Roadmap, RoadmapId, VideoId,
};
use tracing::debug;

/// Playlist operations on behalf of the context's user
pub struct PlaylistService<'a, C: StorageContext + ?Sized> {
    ctx: &'a C,
}

impl<'a, C: StorageContext + ?Sized> PlaylistService<'a, C> {
    pub fn new(ctx: &'a C) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Playlists
    // ========================================================================

    pub async fn list_playlists(&self) -> Result<Vec<Playlist>> {
        self.ctx.get_user_playlists().await
    }

    pub async fn get_playlist(&self, id: &PlaylistId) -> Result<Playlist> {
        self.ctx
            .get_playlist(id)
            .await?
            .ok_or_else(|| LearnTubeError::not_found("Playlist", id.as_str()))
    }

    pub async fn create_playlist(&self, title: &str) -> Result<Playlist> {
        let title = validate_playlist_title(title)?;
        let playlist = self
            .ctx
            .create_playlist(CreatePlaylist {
                user_id: self.ctx.user_id(),
                title,
            })
            .await?;

        debug!(playlist_id = %playlist.id, user_id = %playlist.user_id, "Created playlist");
        Ok(playlist)
    }

    pub async fn rename_playlist(&self, id: &PlaylistId, title: &str) -> Result<Playlist> {
        let title = validate_playlist_title(title)?;
        self.update(id, |playlist| {
            playlist.title = title;
            Ok(())
        })
        .await
    }

    /// Delete a playlist; its roadmaps go with it
    pub async fn delete_playlist(&self, id: &PlaylistId) -> Result<()> {
        self.ctx.delete_playlist(id).await?;
        debug!(playlist_id = %id, "Deleted playlist");
        Ok(())
    }

    /// Totals across all of the user's playlists
    pub async fn user_stats(&self) -> Result<UserStats> {
        let playlists = self.list_playlists().await?;
        Ok(aggregator::user_stats(&playlists))
    }

    pub async fn playlist_stats(&self, id: &PlaylistId) -> Result<PlaylistStats> {
        let playlist = self.get_playlist(id).await?;
        Ok(aggregator::playlist_stats(&playlist))
    }

    // ========================================================================
    // Roadmaps
    // ========================================================================

    pub async fn list_roadmaps(&self, playlist_id: &PlaylistId) -> Result<Vec<Roadmap>> {
        Ok(self.get_playlist(playlist_id).await?.roadmaps)
    }

    pub async fn create_roadmap(&self, playlist_id: &PlaylistId, title: &str) -> Result<Playlist> {
        let roadmap = Roadmap::new(title)?;
        self.update(playlist_id, |playlist| {
            debug!(playlist_id = %playlist.id, roadmap_id = %roadmap.id, "Created roadmap");
            playlist.roadmaps.push(roadmap);
            Ok(())
        })
        .await
    }

    pub async fn rename_roadmap(
        &self,
        playlist_id: &PlaylistId,
        roadmap_id: &RoadmapId,
        title: &str,
    ) -> Result<Playlist> {
        let title = validate_roadmap_title(title)?;
        self.update(playlist_id, |playlist| {
            playlist.roadmap_mut(roadmap_id)?.title = title;
            Ok(())
        })
        .await
    }

    pub async fn delete_roadmap(
        &self,
        playlist_id: &PlaylistId,
        roadmap_id: &RoadmapId,
    ) -> Result<Playlist> {
        self.update(playlist_id, |playlist| {
            playlist.roadmap(roadmap_id)?;
            playlist.roadmaps.retain(|r| &r.id != roadmap_id);
            Ok(())
        })
        .await
    }

    // ========================================================================
    // Steps
    // ========================================================================

    pub async fn add_video(
        &self,
        playlist_id: &PlaylistId,
        roadmap_id: &RoadmapId,
        video: NewVideo,
    ) -> Result<Playlist> {
        let video = video.into_video()?;
        self.update(playlist_id, |playlist| {
            let roadmap = playlist.roadmap_mut(roadmap_id)?;
            *roadmap = aggregator::add_step(roadmap, video)?;
            Ok(())
        })
        .await
    }

    /// Remove a step; an absent video is not an error
    pub async fn remove_video(
        &self,
        playlist_id: &PlaylistId,
        roadmap_id: &RoadmapId,
        video_id: &VideoId,
    ) -> Result<Playlist> {
        let mut playlist = self.get_playlist(playlist_id).await?;
        if !playlist.roadmap(roadmap_id)?.contains(video_id) {
            // Nothing to remove; leave updated_at alone
            return Ok(playlist);
        }

        let roadmap = playlist.roadmap_mut(roadmap_id)?;
        *roadmap = aggregator::remove_step(roadmap, video_id);
        self.save(playlist).await
    }

    pub async fn update_progress(
        &self,
        playlist_id: &PlaylistId,
        roadmap_id: &RoadmapId,
        video_id: &VideoId,
        progress: &str,
    ) -> Result<Playlist> {
        self.update(playlist_id, |playlist| {
            let roadmap = playlist.roadmap_mut(roadmap_id)?;
            *roadmap = aggregator::set_progress(roadmap, video_id, progress)?;
            Ok(())
        })
        .await
    }

    /// Load, apply `change`, and persist in one document write.
    ///
    /// Nothing is written when `change` fails.
    async fn update<F>(&self, id: &PlaylistId, change: F) -> Result<Playlist>
    where
        F: FnOnce(&mut Playlist) -> Result<()> + Send,
    {
        let mut playlist = self.get_playlist(id).await?;
        change(&mut playlist)?;
        self.save(playlist).await
    }

    async fn save(&self, mut playlist: Playlist) -> Result<Playlist> {
        playlist.touch();
        self.ctx.save_playlist(&playlist).await?;
        Ok(playlist)
    }
}
