/// Playlists API routes
use crate::{
    error::Result,
    extract::{JsonBody, PathParams},
    middleware::AuthenticatedUser,
    response::ApiResponse,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use learntube_core::{PlaylistId, PlaylistOverview, PlaylistService, PlaylistStats, UserStats};
use serde::Deserialize;

/// Body for creating or renaming a playlist or roadmap
#[derive(Debug, Deserialize)]
pub struct TitleRequest {
    pub title: String,
}

/// GET /api/playlists
/// All playlists owned by the authenticated user, with stats
pub async fn list_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<PlaylistOverview>>>> {
    let ctx = app_state.context(auth.user_id());
    let playlists = PlaylistService::new(&ctx).list_playlists().await?;

    Ok(Json(ApiResponse::ok(
        playlists.into_iter().map(PlaylistOverview::from).collect(),
    )))
}

/// POST /api/playlists
pub async fn create_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    JsonBody(req): JsonBody<TitleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PlaylistOverview>>)> {
    let ctx = app_state.context(auth.user_id());
    let playlist = PlaylistService::new(&ctx).create_playlist(&req.title).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(playlist.into(), "Playlist created")),
    ))
}

/// GET /api/playlists/:id
pub async fn get_playlist(
    PathParams(id): PathParams<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<PlaylistOverview>>> {
    let ctx = app_state.context(auth.user_id());
    let playlist = PlaylistService::new(&ctx)
        .get_playlist(&PlaylistId::new(id))
        .await?;

    Ok(Json(ApiResponse::ok(playlist.into())))
}

/// PUT /api/playlists/:id
/// Rename a playlist
pub async fn update_playlist(
    PathParams(id): PathParams<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    JsonBody(req): JsonBody<TitleRequest>,
) -> Result<Json<ApiResponse<PlaylistOverview>>> {
    let ctx = app_state.context(auth.user_id());
    let playlist = PlaylistService::new(&ctx)
        .rename_playlist(&PlaylistId::new(id), &req.title)
        .await?;

    Ok(Json(ApiResponse::with_message(
        playlist.into(),
        "Playlist updated",
    )))
}

/// DELETE /api/playlists/:id
/// Delete a playlist together with its roadmaps
pub async fn delete_playlist(
    PathParams(id): PathParams<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<()>>> {
    let ctx = app_state.context(auth.user_id());
    PlaylistService::new(&ctx)
        .delete_playlist(&PlaylistId::new(id))
        .await?;

    Ok(Json(ApiResponse::message("Playlist deleted")))
}

/// GET /api/playlists/:id/stats
pub async fn playlist_stats(
    PathParams(id): PathParams<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<PlaylistStats>>> {
    let ctx = app_state.context(auth.user_id());
    let stats = PlaylistService::new(&ctx)
        .playlist_stats(&PlaylistId::new(id))
        .await?;

    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/playlists/stats
/// Progress totals across every playlist of the user
pub async fn user_stats(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<UserStats>>> {
    let ctx = app_state.context(auth.user_id());
    let stats = PlaylistService::new(&ctx).user_stats().await?;

    Ok(Json(ApiResponse::ok(stats)))
}
