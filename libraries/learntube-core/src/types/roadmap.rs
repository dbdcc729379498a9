/// Roadmap domain types
use crate::error::{LearnTubeError, Result};
use crate::types::{RoadmapId, Video, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of steps in a roadmap. Fixed, not configurable.
pub const MAX_STEPS: usize = 3;

/// Maximum roadmap title length, in characters
pub const MAX_ROADMAP_TITLE_CHARS: usize = 50;

/// Ordered learning path of up to [`MAX_STEPS`] videos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    /// Unique roadmap identifier
    pub id: RoadmapId,

    /// Roadmap title
    pub title: String,

    /// Steps in insertion order
    #[serde(default)]
    pub videos: Vec<Video>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Roadmap {
    /// Create an empty roadmap with a validated title
    pub fn new(title: &str) -> Result<Self> {
        Ok(Self {
            id: RoadmapId::generate(),
            title: validate_roadmap_title(title)?,
            videos: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Find a step by video id
    pub fn video(&self, video_id: &VideoId) -> Option<&Video> {
        self.videos.iter().find(|v| &v.video_id == video_id)
    }

    pub fn contains(&self, video_id: &VideoId) -> bool {
        self.video(video_id).is_some()
    }

    /// Whether another step can be added
    pub fn is_full(&self) -> bool {
        self.videos.len() >= MAX_STEPS
    }
}

/// Trim and check a roadmap title
pub fn validate_roadmap_title(title: &str) -> Result<String> {
    validate_title("Roadmap", title, MAX_ROADMAP_TITLE_CHARS)
}

pub(crate) fn validate_title(entity: &str, title: &str, max_chars: usize) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(LearnTubeError::validation(format!(
            "{} title cannot be empty",
            entity
        )));
    }
    if trimmed.chars().count() > max_chars {
        return Err(LearnTubeError::validation(format!(
            "{} title cannot exceed {} characters",
            entity, max_chars
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roadmap_creation_trims_title() {
        let roadmap = Roadmap::new("  Basics  ").unwrap();
        assert_eq!(roadmap.title, "Basics");
        assert!(roadmap.videos.is_empty());
        assert!(!roadmap.is_full());
    }

    #[test]
    fn roadmap_title_limits() {
        assert!(Roadmap::new("").is_err());
        assert!(Roadmap::new("   ").is_err());
        assert!(Roadmap::new(&"a".repeat(50)).is_ok());
        assert!(Roadmap::new(&"a".repeat(51)).is_err());
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        // 50 two-byte characters
        assert!(Roadmap::new(&"é".repeat(50)).is_ok());
    }
}
