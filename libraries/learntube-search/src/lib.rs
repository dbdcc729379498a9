//! LearnTube video search
//!
//! Thin client over the YouTube Data API `search` endpoint. Results are mapped
//! to [`VideoCandidate`] records; attaching one to a roadmap is the caller's
//! business.
//!
//! The [`VideoSearch`] trait is the seam the server depends on, so handlers can
//! be exercised without network access.

mod client;
mod error;
mod types;

pub use client::{SearchConfig, YouTubeClient, DEFAULT_BASE_URL};
pub use error::{Result, SearchError};

use async_trait::async_trait;
use learntube_core::VideoCandidate;

/// Source of video candidates
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Search videos matching `query`
    async fn search(&self, query: &str) -> Result<Vec<VideoCandidate>>;
}
