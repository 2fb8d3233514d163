//! Domain models and API request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user
///
/// The password hash never leaves the process: it is skipped during
/// serialization so no response can leak it.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// A coloring worksheet in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worksheet {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub difficulty: String,
    pub pages: i32,
    pub price: f64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Payload for creating a worksheet (id and created_at are server-assigned)
#[derive(Debug, Clone, Deserialize)]
pub struct NewWorksheet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub pages: i32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Response for successful login/registration
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: User,
}
