//! Authentication middleware
//!
//! Provides Axum extractors for JWT validation, replacing the bearer-header
//! parsing that earlier revisions duplicated in every protected handler.
//!
//! A missing or malformed header and a rejected token both map to 401
//! externally; the distinction survives only in logs.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

use super::Claims;

/// Authenticated user extracted from a `Authorization: Bearer <token>` header
///
/// Carries the full decoded claims so handlers can read the identity and
/// role without another store lookup.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
}

impl AuthUser {
    pub fn user_id(&self) -> i64 {
        self.claims.user_id
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                debug!("authorization header absent");
                ApiError::MissingAuthHeader
            })?;

        // Check Bearer prefix; anything shorter than "Bearer " plus a token
        // byte fails the same way as an absent header.
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            debug!("authorization header malformed");
            ApiError::MissingAuthHeader
        })?;

        // Uses pre-computed JWT keys from state; TokenError keeps the
        // expired/forged distinction for the debug log inside the From impl.
        let claims = app_state.jwt().validate(token)?;

        Ok(AuthUser { claims })
    }
}

/// Authenticated user that additionally holds the admin role
///
/// Catalog mutation requires this; everyone else gets 403.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub claims: Claims,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if auth.claims.role != "admin" {
            return Err(ApiError::Forbidden("Admin access required".to_string()));
        }
        Ok(AdminUser {
            claims: auth.claims,
        })
    }
}
