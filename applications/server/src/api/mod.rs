/// API route modules
pub mod auth;
pub mod health;
pub mod playlists;
pub mod roadmaps;
pub mod search;
pub mod videos;

use crate::{middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router, everything nested under `/api`
pub fn create_router(app_state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .route("/auth/profile", get(auth::profile))
        // Playlists
        .route(
            "/playlists",
            get(playlists::list_playlists).post(playlists::create_playlist),
        )
        .route("/playlists/stats", get(playlists::user_stats))
        .route(
            "/playlists/:id",
            get(playlists::get_playlist)
                .put(playlists::update_playlist)
                .delete(playlists::delete_playlist),
        )
        .route("/playlists/:id/stats", get(playlists::playlist_stats))
        // Roadmaps
        .route(
            "/playlists/:id/roadmaps",
            get(roadmaps::list_roadmaps).post(roadmaps::create_roadmap),
        )
        .route(
            "/playlists/:id/roadmaps/:roadmap_id",
            put(roadmaps::update_roadmap).delete(roadmaps::delete_roadmap),
        )
        // Steps
        .route(
            "/playlists/:id/roadmaps/:roadmap_id/videos",
            post(videos::add_video),
        )
        .route(
            "/playlists/:id/roadmaps/:roadmap_id/videos/:video_id",
            axum::routing::delete(videos::remove_video),
        )
        .route(
            "/playlists/:id/roadmaps/:roadmap_id/videos/:video_id/progress",
            put(videos::update_progress),
        )
        // Search
        .route("/search", get(search::search_videos))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
