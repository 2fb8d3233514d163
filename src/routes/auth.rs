//! Authentication routes
//!
//! Endpoints for registration, login, forgot-password and the
//! authenticated dashboard.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User, Worksheet};
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/forgot-password", post(forgot_password))
        .route("/dashboard", get(dashboard))
}

/// Register a new user
///
/// POST /api/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (user, token) =
        UserService::register(&state.users, state.jwt(), &req.email, &req.password, &req.name)
            .await?;

    info!(user_id = user.id, "user registered");
    Ok(Json(AuthResponse {
        success: true,
        message: "Registration successful".to_string(),
        token,
        user,
    }))
}

/// Login with email and password
///
/// POST /api/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (user, token) =
        UserService::login(&state.users, state.jwt(), &req.email, &req.password).await?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        user,
    }))
}

#[derive(Debug, Deserialize)]
struct ForgotPasswordRequest {
    email: String,
}

#[derive(Serialize)]
struct ForgotPasswordResponse {
    message: String,
}

/// Request a password reset
///
/// POST /api/forgot-password
///
/// The response body is identical whether or not the email exists, so the
/// endpoint cannot be used to enumerate accounts.
async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Json<ForgotPasswordResponse> {
    if state.users.email_exists(&req.email) {
        info!(email = %req.email, "password reset requested");
    }

    Json(ForgotPasswordResponse {
        message: "If the email exists, a password reset link has been sent".to_string(),
    })
}

#[derive(Serialize)]
struct DashboardResponse {
    message: String,
    user: User,
    worksheets: Vec<Worksheet>,
}

/// Authenticated dashboard: current user plus the full catalog
///
/// GET /api/dashboard
async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DashboardResponse>> {
    let user = UserService::lookup(&state.users, auth.user_id())?;

    Ok(Json(DashboardResponse {
        message: "Welcome to Color Fun!".to_string(),
        user,
        worksheets: state.catalog.list(),
    }))
}
