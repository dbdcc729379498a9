/// Read models pairing stored documents with their derived statistics
use crate::aggregator::{playlist_stats, roadmap_stats, PlaylistStats, RoadmapStats};
use crate::types::{Playlist, PlaylistId, Roadmap, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Roadmap plus its completion counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapOverview {
    #[serde(flatten)]
    pub roadmap: Roadmap,
    pub stats: RoadmapStats,
}

impl From<Roadmap> for RoadmapOverview {
    fn from(roadmap: Roadmap) -> Self {
        let stats = roadmap_stats(&roadmap);
        Self { roadmap, stats }
    }
}

/// Playlist plus per-roadmap and aggregate completion counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistOverview {
    pub id: PlaylistId,
    pub user_id: UserId,
    pub title: String,
    pub roadmaps: Vec<RoadmapOverview>,
    pub stats: PlaylistStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Playlist> for PlaylistOverview {
    fn from(playlist: Playlist) -> Self {
        let stats = playlist_stats(&playlist);
        Self {
            id: playlist.id,
            user_id: playlist.user_id,
            title: playlist.title,
            roadmaps: playlist.roadmaps.into_iter().map(Into::into).collect(),
            stats,
            created_at: playlist.created_at,
            updated_at: playlist.updated_at,
        }
    }
}
