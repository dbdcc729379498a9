/// Playlist domain types
use crate::error::{LearnTubeError, Result};
use crate::types::roadmap::validate_title;
use crate::types::{PlaylistId, Roadmap, RoadmapId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum playlist title length, in characters
pub const MAX_PLAYLIST_TITLE_CHARS: usize = 100;

/// Top-level user-owned container of roadmaps
///
/// A playlist is persisted as one document: its roadmaps and their videos
/// are loaded and saved together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Owner user ID
    pub user_id: UserId,

    /// Playlist title
    pub title: String,

    /// Roadmaps in creation order
    #[serde(default)]
    pub roadmaps: Vec<Roadmap>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Create an empty playlist with a validated title
    pub fn new(user_id: UserId, title: &str) -> Result<Self> {
        let now = Utc::now();
        Ok(Self {
            id: PlaylistId::generate(),
            user_id,
            title: validate_playlist_title(title)?,
            roadmaps: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Find a roadmap by id
    pub fn roadmap(&self, roadmap_id: &RoadmapId) -> Result<&Roadmap> {
        self.roadmaps
            .iter()
            .find(|r| &r.id == roadmap_id)
            .ok_or_else(|| LearnTubeError::not_found("Roadmap", roadmap_id.as_str()))
    }

    /// Find a roadmap by id, mutably
    pub fn roadmap_mut(&mut self, roadmap_id: &RoadmapId) -> Result<&mut Roadmap> {
        self.roadmaps
            .iter_mut()
            .find(|r| &r.id == roadmap_id)
            .ok_or_else(|| LearnTubeError::not_found("Roadmap", roadmap_id.as_str()))
    }

    /// Mark the document as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Data for creating a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlaylist {
    pub user_id: UserId,
    pub title: String,
}

/// Trim and check a playlist title
pub fn validate_playlist_title(title: &str) -> Result<String> {
    validate_title("Playlist", title, MAX_PLAYLIST_TITLE_CHARS)
}
