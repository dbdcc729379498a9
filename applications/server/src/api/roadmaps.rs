/// Roadmap API routes
///
/// Mutations answer with the whole updated playlist so clients can refresh
/// their view without a second request.
use super::playlists::TitleRequest;
use crate::{
    error::Result,
    extract::{JsonBody, PathParams},
    middleware::AuthenticatedUser,
    response::ApiResponse,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use learntube_core::{PlaylistId, PlaylistOverview, PlaylistService, RoadmapId, RoadmapOverview};

/// GET /api/playlists/:id/roadmaps
pub async fn list_roadmaps(
    PathParams(id): PathParams<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<RoadmapOverview>>>> {
    let ctx = app_state.context(auth.user_id());
    let roadmaps = PlaylistService::new(&ctx)
        .list_roadmaps(&PlaylistId::new(id))
        .await?;

    Ok(Json(ApiResponse::ok(
        roadmaps.into_iter().map(RoadmapOverview::from).collect(),
    )))
}

/// POST /api/playlists/:id/roadmaps
pub async fn create_roadmap(
    PathParams(id): PathParams<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    JsonBody(req): JsonBody<TitleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PlaylistOverview>>)> {
    let ctx = app_state.context(auth.user_id());
    let playlist = PlaylistService::new(&ctx)
        .create_roadmap(&PlaylistId::new(id), &req.title)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(playlist.into(), "Roadmap created")),
    ))
}

/// PUT /api/playlists/:id/roadmaps/:roadmap_id
pub async fn update_roadmap(
    PathParams((id, roadmap_id)): PathParams<(String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    JsonBody(req): JsonBody<TitleRequest>,
) -> Result<Json<ApiResponse<PlaylistOverview>>> {
    let ctx = app_state.context(auth.user_id());
    let playlist = PlaylistService::new(&ctx)
        .rename_roadmap(&PlaylistId::new(id), &RoadmapId::new(roadmap_id), &req.title)
        .await?;

    Ok(Json(ApiResponse::with_message(
        playlist.into(),
        "Roadmap updated",
    )))
}

/// DELETE /api/playlists/:id/roadmaps/:roadmap_id
pub async fn delete_roadmap(
    PathParams((id, roadmap_id)): PathParams<(String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<PlaylistOverview>>> {
    let ctx = app_state.context(auth.user_id());
    let playlist = PlaylistService::new(&ctx)
        .delete_roadmap(&PlaylistId::new(id), &RoadmapId::new(roadmap_id))
        .await?;

    Ok(Json(ApiResponse::with_message(
        playlist.into(),
        "Roadmap deleted",
    )))
}
