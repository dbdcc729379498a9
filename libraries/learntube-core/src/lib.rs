//! LearnTube Core
//!
//! Platform-agnostic domain types, the progress aggregator, and error handling
//! for LearnTube.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `Roadmap`, `Video`, `User`, etc.
//! - **Aggregator**: step capacity/uniqueness rules and completion statistics
//! - **Storage Trait**: `StorageContext`, a user-scoped document store
//! - **Service**: `PlaylistService`, owner-scoped load/modify/save operations
//! - **Error Handling**: Unified `LearnTubeError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use learntube_core::aggregator::{add_step, playlist_stats, set_progress};
//! use learntube_core::types::{Playlist, Roadmap, UserId, Video, VideoId};
//!
//! let mut playlist = Playlist::new(UserId::new("alice"), "Learning Rust").unwrap();
//! let roadmap = Roadmap::new("Ownership").unwrap();
//! let roadmap = add_step(&roadmap, Video::new(VideoId::new("abc"), "Borrowing")).unwrap();
//! let roadmap = set_progress(&roadmap, &VideoId::new("abc"), "Completed").unwrap();
//! playlist.roadmaps.push(roadmap);
//!
//! let stats = playlist_stats(&playlist);
//! assert_eq!(stats.percent, 100);
//! assert_eq!(stats.roadmaps_complete, 1);
//! ```

#![forbid(unsafe_code)]

pub mod aggregator;
pub mod error;
pub mod service;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use aggregator::{PlaylistStats, RoadmapStats, UserStats};
pub use error::{LearnTubeError, Result};
pub use service::PlaylistService;
pub use storage::StorageContext;

pub use types::{
    CreatePlaylist, CreateUser, NewVideo, Playlist, PlaylistId, PlaylistOverview, Progress,
    Roadmap, RoadmapId, RoadmapOverview, User, UserId, Video, VideoCandidate, VideoId, MAX_STEPS,
};
