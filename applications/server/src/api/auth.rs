/// Authentication API routes
use crate::{
    error::{Result, ServerError},
    extract::JsonBody,
    middleware::AuthenticatedUser,
    response::ApiResponse,
    services::AuthService,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use learntube_core::{types::normalize_email, CreateUser, User};
use learntube_storage::users;
use serde::{Deserialize, Serialize};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub token_type: String,
}

/// POST /api/auth/register
pub async fn register(
    State(app_state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>)> {
    let new_user = CreateUser::new(&req.name, &req.email)?;
    AuthService::validate_password(&req.password)?;

    let password_hash = app_state.auth_service.hash_password(&req.password)?;
    let user = users::create(app_state.db.pool(), new_user, &password_hash).await?;
    tracing::info!(user_id = %user.id, "Registered user");

    let response = issue_tokens(&app_state.auth_service, user)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(response, "Registration successful")),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(app_state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>> {
    let email =
        normalize_email(&req.email).map_err(|_| ServerError::Auth(INVALID_CREDENTIALS.to_string()))?;
    let pool = app_state.db.pool();

    let user = users::get_by_email(pool, &email)
        .await?
        .ok_or_else(|| ServerError::Auth(INVALID_CREDENTIALS.to_string()))?;

    let password_hash = users::get_password_hash(pool, &user.id)
        .await?
        .ok_or_else(|| ServerError::Auth(INVALID_CREDENTIALS.to_string()))?;

    if !app_state
        .auth_service
        .verify_password(&req.password, &password_hash)?
    {
        return Err(ServerError::Auth(INVALID_CREDENTIALS.to_string()));
    }

    let response = issue_tokens(&app_state.auth_service, user)?;
    Ok(Json(ApiResponse::with_message(response, "Login successful")))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(app_state): State<AppState>,
    JsonBody(req): JsonBody<RefreshRequest>,
) -> Result<Json<ApiResponse<RefreshResponse>>> {
    let access_token = app_state
        .auth_service
        .refresh_access_token(&app_state.db, &req.refresh_token)
        .await?;

    Ok(Json(ApiResponse::ok(RefreshResponse {
        access_token,
        token_type: "Bearer".to_string(),
    })))
}

/// GET /api/auth/profile
pub async fn profile(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<ApiResponse<User>>> {
    let user = users::get_by_id(app_state.db.pool(), auth.user_id())
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    Ok(Json(ApiResponse::ok(user)))
}

fn issue_tokens(auth_service: &AuthService, user: User) -> Result<AuthResponse> {
    Ok(AuthResponse {
        access_token: auth_service.create_access_token(&user.id)?,
        refresh_token: auth_service.create_refresh_token(&user.id)?,
        token_type: "Bearer".to_string(),
        user,
    })
}
