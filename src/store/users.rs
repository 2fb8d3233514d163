//! User store
//!
//! Holds user records keyed by email (case-sensitive). A single mutex
//! guards both reads and writes so concurrent registrations cannot race on
//! ID assignment or lose updates.

use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::StoreError;
use crate::models::User;

struct UserMap {
    by_email: HashMap<String, User>,
    next_id: i64,
}

/// Shared in-memory user store
///
/// Clone is cheap; all clones see the same records.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<Mutex<UserMap>>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(UserMap {
                by_email: HashMap::new(),
                next_id: 1,
            })),
        }
    }

    fn locked(&self) -> MutexGuard<'_, UserMap> {
        // A poisoned lock means a panic mid-operation; the map itself is
        // still usable, so recover the guard.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Create a user with a pre-hashed password
    ///
    /// Assigns the next sequential ID. Fails if the email is already taken.
    pub fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        role: &str,
    ) -> Result<User, StoreError> {
        let mut map = self.locked();

        if map.by_email.contains_key(email) {
            return Err(StoreError::AlreadyExists(
                "Email already registered".to_string(),
            ));
        }

        let user = User {
            id: map.next_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
        };
        map.next_id += 1;
        map.by_email.insert(email.to_string(), user.clone());

        Ok(user)
    }

    /// Find a user by email (exact, case-sensitive match)
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.locked().by_email.get(email).cloned()
    }

    /// Find a user by ID
    pub fn find_by_id(&self, id: i64) -> Option<User> {
        self.locked().by_email.values().find(|u| u.id == id).cloned()
    }

    /// Check if an email is already registered
    pub fn email_exists(&self, email: &str) -> bool {
        self.locked().by_email.contains_key(email)
    }
}
