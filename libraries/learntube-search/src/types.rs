//! YouTube Data API v3 response types.

use learntube_core::{VideoCandidate, VideoId};
use serde::Deserialize;

/// Response of `GET /search`
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: ItemId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemId {
    /// Absent for channel/playlist results
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thumbnails {
    pub high: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: String,
}

/// Error body: `{"error": {"code": 403, "message": "..."}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(default)]
    pub message: String,
}

impl SearchItem {
    /// Convert to a candidate; non-video results yield `None`
    pub fn into_candidate(self) -> Option<VideoCandidate> {
        let video_id = self.id.video_id.filter(|id| !id.is_empty())?;
        let thumbnails = self.snippet.thumbnails;
        let thumbnail_url = thumbnails
            .high
            .or(thumbnails.medium)
            .or(thumbnails.default)
            .map(|t| t.url);

        let mut candidate = VideoCandidate::new(
            VideoId::new(video_id),
            unescape_html(&self.snippet.title),
            unescape_html(&self.snippet.channel_title),
            self.snippet.published_at,
        );
        candidate.thumbnail_url = thumbnail_url;
        Some(candidate)
    }
}

/// Undo the HTML escaping the API applies to titles
fn unescape_html(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_response() {
        let body = r#"{
            "kind": "youtube#searchListResponse",
            "items": [
                {
                    "id": { "kind": "youtube#video", "videoId": "abc123" },
                    "snippet": {
                        "publishedAt": "2023-05-01T12:00:00Z",
                        "title": "Rust &amp; WebAssembly",
                        "channelTitle": "Let&#39;s Get Rusty",
                        "thumbnails": {
                            "default": { "url": "https://i.ytimg.com/vi/abc123/default.jpg" },
                            "high": { "url": "https://i.ytimg.com/vi/abc123/hqdefault.jpg" }
                        }
                    }
                },
                {
                    "id": { "kind": "youtube#channel", "channelId": "UC123" },
                    "snippet": { "title": "A channel" }
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let candidates: Vec<_> = response
            .items
            .into_iter()
            .filter_map(SearchItem::into_candidate)
            .collect();

        assert_eq!(candidates.len(), 1);
        let video = &candidates[0];
        assert_eq!(video.video_id.as_str(), "abc123");
        assert_eq!(video.video_title, "Rust & WebAssembly");
        assert_eq!(video.channel_title, "Let's Get Rusty");
        assert_eq!(
            video.thumbnail_url.as_deref(),
            Some("https://i.ytimg.com/vi/abc123/hqdefault.jpg")
        );
        assert_eq!(video.published_at, "2023-05-01T12:00:00Z");
        assert_eq!(video.video_url, "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn unescape_does_not_double_decode() {
        assert_eq!(unescape_html("&amp;lt;"), "&lt;");
        assert_eq!(unescape_html("&quot;hi&quot;"), "\"hi\"");
    }

    #[test]
    fn unescape_handles_numeric_and_named_entities() {
        assert_eq!(unescape_html("Don&#8217;t Panic"), "Don\u{2019}t Panic");
        assert_eq!(unescape_html("Caf&eacute; &#x26; Rust"), "Caf\u{e9} & Rust");
        assert_eq!(unescape_html("plain title"), "plain title");
    }
}
