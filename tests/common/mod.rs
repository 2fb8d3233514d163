//! Common test utilities for integration tests
//!
//! Builds a full application instance backed by fresh in-memory stores,
//! so tests are isolated without any external setup.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use colorfun_api::auth::PasswordService;
use colorfun_api::config::{AppConfig, JwtConfig, ServerConfig, UploadConfig};
use colorfun_api::state::AppState;
use colorfun_api::{models, routes};
use serde_json::Value;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with empty stores
    pub fn new() -> Self {
        let config = test_config();
        std::fs::create_dir_all(&config.uploads.dir).ok();
        let state = AppState::new(config);
        let app = routes::create_router(state.clone());
        Self { app, state }
    }

    /// Create a user directly in the store, bypassing the HTTP layer
    pub async fn seed_user(&self, email: &str, password: &str, name: &str, role: &str) -> models::User {
        let hash = PasswordService::hash_async(password.to_string())
            .await
            .expect("Failed to hash seed password");
        self.state
            .users
            .create(email, &hash, name, role)
            .expect("Failed to seed user")
    }

    /// Issue a token for a user with the app's own JWT service
    pub fn token_for(&self, user: &models::User) -> String {
        self.state.jwt().issue(user).expect("Failed to issue token")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("GET", path, None, token).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, path: &str, body: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("POST", path, Some(body), token).await
    }

    /// Make a DELETE request with a JSON body
    pub async fn delete(&self, path: &str, body: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request("DELETE", path, Some(body), token).await
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);
        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        jwt: JwtConfig {
            secret: "test-secret-key-for-testing-only-32chars".to_string(),
            token_expiry_secs: 86400,
        },
        uploads: UploadConfig {
            dir: std::env::temp_dir()
                .join("colorfun-test-uploads")
                .to_string_lossy()
                .into_owned(),
        },
        seed_users: Vec::new(),
    }
}
