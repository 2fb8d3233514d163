//! Authentication module
//!
//! Provides JWT-based authentication with bcrypt password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService, TokenError};
pub use middleware::{AdminUser, AuthUser};
pub use password::PasswordService;
