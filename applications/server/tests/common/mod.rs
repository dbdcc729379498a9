//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use learntube_core::{VideoCandidate, VideoId};
use learntube_search::{SearchError, VideoSearch};
use learntube_server::{api, services::AuthService, state::AppState};
use learntube_storage::Database;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const TEST_PASSWORD: &str = "TestPassword123!";

/// Search backend returning canned results
pub struct StubSearch;

#[async_trait]
impl VideoSearch for StubSearch {
    async fn search(&self, query: &str) -> learntube_search::Result<Vec<VideoCandidate>> {
        if query == "fail" {
            return Err(SearchError::Api {
                status: 403,
                message: "quotaExceeded".to_string(),
            });
        }
        Ok(vec![VideoCandidate::new(
            VideoId::new("stub-1"),
            format!("About {}", query),
            "Stub Channel",
            "2024-01-01T00:00:00Z",
        )
        .with_thumbnail("https://i.ytimg.com/vi/stub-1/hqdefault.jpg")])
    }
}

/// Router over a throwaway `SQLite` file
pub struct TestApp {
    pub router: Router,
    pub auth_service: Arc<AuthService>,
    pub db: Arc<Database>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());
        let db = Arc::new(Database::new(&db_url).await.unwrap());

        let auth_service = Arc::new(
            AuthService::new("test-secret-key".to_string(), 1, 1).with_bcrypt_cost(4),
        );

        let app_state = AppState::new(db.clone(), Arc::clone(&auth_service), Arc::new(StubSearch));

        Self {
            router: api::create_router(app_state),
            auth_service,
            db,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and decode the JSON envelope
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Register a user and return their access token
    pub async fn register(&self, name: &str, email: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/auth/register",
                None,
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": TEST_PASSWORD,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["data"]["accessToken"].as_str().unwrap().to_string()
    }
}
