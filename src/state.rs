//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! All fields are Arc-backed, so cloning across async tasks is O(1).
//! The JWT keys are derived once here, at construction, from the
//! externally supplied secret.

use crate::auth::JwtService;
use crate::config::AppConfig;
use crate::store::{CartStore, UserStore, WorksheetStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pre-initialized JWT service with cached keys
    pub jwt: JwtService,
    /// In-memory user store
    pub users: UserStore,
    /// In-memory worksheet catalog
    pub catalog: WorksheetStore,
    /// In-memory per-user carts
    pub carts: CartStore,
}

impl AppState {
    /// Create a new application state with empty stores
    ///
    /// Pre-computes the JWT keys from the config secret; call once at
    /// startup, not per request.
    pub fn new(config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.token_expiry_secs);

        Self {
            config: Arc::new(config),
            jwt,
            users: UserStore::new(),
            catalog: WorksheetStore::new(),
            carts: CartStore::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_clone_shares_stores() {
        let state = AppState::new(AppConfig::default());
        let cloned = state.clone();

        state.users.create("a@example.com", "h", "A", "user").unwrap();
        assert!(cloned.users.email_exists("a@example.com"));
    }

    #[test]
    fn test_jwt_service_is_precomputed() {
        let state = AppState::new(AppConfig::default());
        let user = state
            .users
            .create("a@example.com", "h", "A", "user")
            .unwrap();

        let token = state.jwt().issue(&user).unwrap();
        assert!(!token.is_empty());
        assert_eq!(state.jwt().validate(&token).unwrap().user_id, user.id);
    }
}
