//! Progress aggregator
//!
//! Structural rules for roadmap steps and the completion statistics derived
//! from them. Every mutation takes the current value by reference and returns
//! the updated value, so a failed call leaves the input untouched.
//!
//! Statistics are never stored; they are recomputed from the videos on every
//! call.

use crate::error::{LearnTubeError, Result};
use crate::types::{Playlist, Progress, Roadmap, Video, VideoId, MAX_STEPS};
use serde::{Deserialize, Serialize};

/// Completion counts for one roadmap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStats {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

impl RoadmapStats {
    /// `total > 0` and every step completed
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Completion counts summed over a playlist's roadmaps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStats {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub roadmaps_complete: usize,
    pub roadmaps_total: usize,
}

/// Totals across every playlist a user owns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub playlists: usize,
    pub completed: usize,
    /// Steps not yet `Completed`
    pub remaining: usize,
    pub total: usize,
    pub percent: u8,
    pub roadmaps_complete: usize,
    pub roadmaps_total: usize,
}

/// Append a step.
///
/// Fails with `CapacityExceeded` when the roadmap already has [`MAX_STEPS`]
/// videos and with `DuplicateStep` when the video id is already present.
pub fn add_step(roadmap: &Roadmap, video: Video) -> Result<Roadmap> {
    if roadmap.is_full() {
        return Err(LearnTubeError::CapacityExceeded { max: MAX_STEPS });
    }
    if roadmap.contains(&video.video_id) {
        return Err(LearnTubeError::DuplicateStep(video.video_id.to_string()));
    }

    let mut updated = roadmap.clone();
    updated.videos.push(video);
    Ok(updated)
}

/// Remove a step. Removing an absent id is a no-op.
pub fn remove_step(roadmap: &Roadmap, video_id: &VideoId) -> Roadmap {
    let mut updated = roadmap.clone();
    updated.videos.retain(|v| &v.video_id != video_id);
    updated
}

/// Set the progress of one step from its wire literal.
///
/// The literal is checked before the lookup, so an invalid state is reported
/// even for an unknown video.
pub fn set_progress(roadmap: &Roadmap, video_id: &VideoId, state: &str) -> Result<Roadmap> {
    let progress: Progress = state.parse()?;
    set_progress_to(roadmap, video_id, progress)
}

/// Typed variant of [`set_progress`]
pub fn set_progress_to(roadmap: &Roadmap, video_id: &VideoId, progress: Progress) -> Result<Roadmap> {
    let index = roadmap
        .videos
        .iter()
        .position(|v| &v.video_id == video_id)
        .ok_or_else(|| LearnTubeError::not_found("Video", video_id.as_str()))?;

    let mut updated = roadmap.clone();
    updated.videos[index].progress = progress;
    Ok(updated)
}

pub fn roadmap_stats(roadmap: &Roadmap) -> RoadmapStats {
    let total = roadmap.videos.len();
    let completed = roadmap
        .videos
        .iter()
        .filter(|v| v.progress.is_completed())
        .count();

    RoadmapStats {
        completed,
        total,
        percent: percent(completed, total),
    }
}

pub fn playlist_stats(playlist: &Playlist) -> PlaylistStats {
    let mut stats = playlist
        .roadmaps
        .iter()
        .map(roadmap_stats)
        .fold(PlaylistStats::default(), |mut acc, r| {
            acc.completed += r.completed;
            acc.total += r.total;
            acc.roadmaps_total += 1;
            if r.is_complete() {
                acc.roadmaps_complete += 1;
            }
            acc
        });

    stats.percent = percent(stats.completed, stats.total);
    stats
}

pub fn user_stats(playlists: &[Playlist]) -> UserStats {
    let mut stats = playlists
        .iter()
        .map(playlist_stats)
        .fold(UserStats::default(), |mut acc, p| {
            acc.playlists += 1;
            acc.completed += p.completed;
            acc.total += p.total;
            acc.roadmaps_complete += p.roadmaps_complete;
            acc.roadmaps_total += p.roadmaps_total;
            acc
        });

    stats.remaining = stats.total - stats.completed;
    stats.percent = percent(stats.completed, stats.total);
    stats
}

/// `round(100 * completed / total)`, or 0 for an empty set
fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // Integer round-half-up of 100 * completed / total
    ((200 * completed + total) / (2 * total)) as u8
}
