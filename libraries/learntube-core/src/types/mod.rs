mod ids;
mod overview;
mod playlist;
mod progress;
mod roadmap;
mod user;
mod video;

pub use ids::{PlaylistId, RoadmapId, UserId, VideoId};
pub use overview::{PlaylistOverview, RoadmapOverview};
pub use playlist::{validate_playlist_title, CreatePlaylist, Playlist, MAX_PLAYLIST_TITLE_CHARS};
pub use progress::Progress;
pub use roadmap::{validate_roadmap_title, Roadmap, MAX_ROADMAP_TITLE_CHARS, MAX_STEPS};
pub use user::{normalize_email, CreateUser, User};
pub use video::{watch_url, NewVideo, Video, VideoCandidate, WATCH_URL_BASE};
