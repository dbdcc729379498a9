/// Roadmap step API routes
use crate::{
    error::Result,
    extract::{JsonBody, PathParams},
    middleware::AuthenticatedUser,
    response::ApiResponse,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use learntube_core::{NewVideo, PlaylistId, PlaylistOverview, PlaylistService, RoadmapId, VideoId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    /// One of "To Do", "In Progress", "Completed"
    pub progress: String,
}

/// POST /api/playlists/:id/roadmaps/:roadmap_id/videos
pub async fn add_video(
    PathParams((id, roadmap_id)): PathParams<(String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    JsonBody(req): JsonBody<NewVideo>,
) -> Result<(StatusCode, Json<ApiResponse<PlaylistOverview>>)> {
    let ctx = app_state.context(auth.user_id());
    let playlist = PlaylistService::new(&ctx)
        .add_video(&PlaylistId::new(id), &RoadmapId::new(roadmap_id), req)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            playlist.into(),
            "Video added to roadmap",
        )),
    ))
}

/// DELETE /api/playlists/:id/roadmaps/:roadmap_id/videos/:video_id
/// Removing a video that is not in the roadmap succeeds without change
pub async fn remove_video(
    PathParams((id, roadmap_id, video_id)): PathParams<(String, String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<PlaylistOverview>>> {
    let ctx = app_state.context(auth.user_id());
    let playlist = PlaylistService::new(&ctx)
        .remove_video(
            &PlaylistId::new(id),
            &RoadmapId::new(roadmap_id),
            &VideoId::new(video_id),
        )
        .await?;

    Ok(Json(ApiResponse::with_message(
        playlist.into(),
        "Video removed from roadmap",
    )))
}

/// PUT /api/playlists/:id/roadmaps/:roadmap_id/videos/:video_id/progress
pub async fn update_progress(
    PathParams((id, roadmap_id, video_id)): PathParams<(String, String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    JsonBody(req): JsonBody<ProgressRequest>,
) -> Result<Json<ApiResponse<PlaylistOverview>>> {
    let ctx = app_state.context(auth.user_id());
    let playlist = PlaylistService::new(&ctx)
        .update_progress(
            &PlaylistId::new(id),
            &RoadmapId::new(roadmap_id),
            &VideoId::new(video_id),
            &req.progress,
        )
        .await?;

    Ok(Json(ApiResponse::with_message(
        playlist.into(),
        "Progress updated",
    )))
}
