/// Video (roadmap step) domain types
use crate::error::{LearnTubeError, Result};
use crate::types::{Progress, VideoId};
use serde::{Deserialize, Serialize};

/// Base URL for derived watch links
pub const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Build the watch URL for a video id
pub fn watch_url(video_id: &VideoId) -> String {
    format!("{}{}", WATCH_URL_BASE, video_id.as_str())
}

/// One roadmap step: an external video plus its progress marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// External video identifier, unique within the roadmap
    pub video_id: VideoId,

    /// Video title
    pub video_title: String,

    /// Watch URL (derived from the id)
    pub video_url: String,

    /// Thumbnail URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Progress marker
    #[serde(default)]
    pub progress: Progress,
}

impl Video {
    /// Create a new step in the `To Do` state
    pub fn new(video_id: VideoId, video_title: impl Into<String>) -> Self {
        let video_url = watch_url(&video_id);
        Self {
            video_id,
            video_title: video_title.into(),
            video_url,
            thumbnail_url: None,
            progress: Progress::ToDo,
        }
    }

    /// Set the thumbnail URL
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }
}

/// Search result record supplied by the video-search boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCandidate {
    pub video_id: VideoId,
    pub video_title: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub channel_title: String,
    pub published_at: String,
}

impl VideoCandidate {
    /// Build a candidate; the watch URL is derived from the id
    pub fn new(
        video_id: VideoId,
        video_title: impl Into<String>,
        channel_title: impl Into<String>,
        published_at: impl Into<String>,
    ) -> Self {
        let video_url = watch_url(&video_id);
        Self {
            video_id,
            video_title: video_title.into(),
            video_url,
            thumbnail_url: None,
            channel_title: channel_title.into(),
            published_at: published_at.into(),
        }
    }

    /// Set the thumbnail URL
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }
}

/// Data needed to attach a video to a roadmap
///
/// Only the id, title and thumbnail are consumed; the watch URL is derived.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub video_id: String,
    pub video_title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl NewVideo {
    /// Validate and turn into a fresh `To Do` step
    pub fn into_video(self) -> Result<Video> {
        let id = self.video_id.trim();
        if id.is_empty() {
            return Err(LearnTubeError::validation("Video id cannot be empty"));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(LearnTubeError::validation(
                "Video id cannot contain whitespace",
            ));
        }

        let mut video = Video::new(VideoId::new(id), self.video_title.trim());
        video.thumbnail_url = self.thumbnail_url.filter(|url| !url.trim().is_empty());
        Ok(video)
    }
}

impl From<VideoCandidate> for NewVideo {
    fn from(candidate: VideoCandidate) -> Self {
        Self {
            video_id: candidate.video_id.as_str().to_string(),
            video_title: candidate.video_title,
            thumbnail_url: candidate.thumbnail_url,
        }
    }
}
