//! User service for registration, login and lookup
//!
//! Password hashing and verification run on the blocking thread pool; the
//! JWT service is passed by reference (pre-computed keys).

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::models::User;
use crate::store::UserStore;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and issue a token
    ///
    /// New accounts always get the `user` role; admin accounts come from
    /// startup seeding only.
    pub async fn register(
        users: &UserStore,
        jwt: &JwtService,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<(User, String), ApiError> {
        if !email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }
        if password.is_empty() {
            return Err(ApiError::Validation("Password is required".to_string()));
        }
        if name.trim().is_empty() {
            return Err(ApiError::Validation("Name is required".to_string()));
        }

        // Hash on the blocking pool (CPU-intensive). The store re-checks
        // uniqueness under its own lock, so a concurrent duplicate still
        // fails cleanly after the hash.
        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = users.create(email, &password_hash, name, "user")?;
        let token = jwt.issue(&user).map_err(|e| anyhow::anyhow!(e))?;

        Ok((user, token))
    }

    /// Verify credentials and issue a token
    ///
    /// Unknown email and wrong password produce the identical error so the
    /// response cannot be used to enumerate accounts.
    pub async fn login(
        users: &UserStore,
        jwt: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<(User, String), ApiError> {
        let user = users
            .find_by_email(email)
            .ok_or(ApiError::InvalidCredentials)?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::InvalidCredentials);
        }

        let token = jwt.issue(&user).map_err(|e| anyhow::anyhow!(e))?;
        Ok((user, token))
    }

    /// Look up a user by the id carried in validated claims
    pub fn lookup(users: &UserStore, id: i64) -> Result<User, ApiError> {
        users
            .find_by_id(id)
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenError;

    fn jwt() -> JwtService {
        JwtService::new("test-secret", 86400)
    }

    #[tokio::test]
    async fn test_register_then_login_round_trip() {
        let users = UserStore::new();
        let jwt = jwt();

        let (user, token) =
            UserService::register(&users, &jwt, "alice@example.com", "pw1234", "Alice")
                .await
                .unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.role, "user");
        assert!(!token.is_empty());

        let (logged_in, _) = UserService::login(&users, &jwt, "alice@example.com", "pw1234")
            .await
            .unwrap();
        assert_eq!(logged_in.id, user.id);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let users = UserStore::new();
        let jwt = jwt();
        UserService::register(&users, &jwt, "alice@example.com", "pw1234", "Alice")
            .await
            .unwrap();

        let unknown = UserService::login(&users, &jwt, "bob@example.com", "pw1234")
            .await
            .unwrap_err();
        let wrong_pw = UserService::login(&users, &jwt, "alice@example.com", "nope99")
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), wrong_pw.to_string());
        assert!(matches!(unknown, ApiError::InvalidCredentials));
        assert!(matches!(wrong_pw, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let users = UserStore::new();
        let jwt = jwt();
        UserService::register(&users, &jwt, "alice@example.com", "pw1234", "Alice")
            .await
            .unwrap();

        let err = UserService::register(&users, &jwt, "alice@example.com", "other1", "Alice 2")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let users = UserStore::new();
        let jwt = jwt();

        let err = UserService::register(&users, &jwt, "not-an-email", "pw1234", "X")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = UserService::register(&users, &jwt, "a@example.com", "", "X")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let err = UserService::register(&users, &jwt, "a@example.com", "pw1234", "  ")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_registration_token_carries_identity() {
        let users = UserStore::new();
        let jwt = jwt();
        let (user, token) =
            UserService::register(&users, &jwt, "alice@example.com", "pw1234", "Alice")
                .await
                .unwrap();

        let claims = jwt.validate(&token).unwrap();
        assert_eq!(claims.user_id, user.id);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, "user");

        // And a token from another service's secret is rejected.
        let other = JwtService::new("other-secret", 86400);
        let foreign = other.issue(&user).unwrap();
        assert!(matches!(
            jwt.validate(&foreign),
            Err(TokenError::InvalidSignature)
        ));
    }
}
