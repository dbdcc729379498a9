/// Video search API routes
use crate::{
    error::{Result, ServerError},
    extract::QueryParams,
    middleware::AuthenticatedUser,
    response::ApiResponse,
    state::AppState,
};
use axum::{extract::State, Json};
use learntube_core::VideoCandidate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// GET /api/search?q=<query>
pub async fn search_videos(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    QueryParams(params): QueryParams<SearchParams>,
) -> Result<Json<ApiResponse<Vec<VideoCandidate>>>> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(ServerError::Validation(
            "Search query cannot be empty".to_string(),
        ));
    }

    let results = app_state.search.search(query).await?;
    Ok(Json(ApiResponse::ok(results)))
}
