//! Registration, login and token-based identity lookup.
//!
//! Passwords are hashed with Argon2id and stored as PHC strings. A
//! successful login returns a signed bearer token carrying the user ID.

use std::sync::Arc;

use anyhow::anyhow;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use shared::{LoginRequest, RegisterRequest};
use tracing::{info, warn};

use crate::domain::errors::{ServiceError, ServiceResult};
use crate::domain::models::user::{LoginError, RegistrationError, User};
use crate::domain::token::TokenIssuer;
use crate::storage::{Connection, UserStorage};

/// Result of a successful login
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub token: String,
    pub user_id: String,
}

#[derive(Clone)]
pub struct AuthService<C: Connection> {
    user_repository: C::UserRepository,
    tokens: TokenIssuer,
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<C: Connection> AuthService<C> {
    pub fn new(connection: Arc<C>, tokens: TokenIssuer) -> Self {
        Self {
            user_repository: connection.create_user_repository(),
            tokens,
        }
    }

    /// Create an account; emails must be unique
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<User> {
        let (name, email, password) = match (
            required(request.name),
            required(request.email),
            request.password.filter(|p| !p.trim().is_empty()),
        ) {
            (Some(name), Some(email), Some(password)) => (name, email, password),
            _ => return Err(RegistrationError::MissingFields.into()),
        };

        info!("Registering user {}", email);

        if self.user_repository.get_user_by_email(&email).await?.is_some() {
            warn!("Registration rejected, email already in use: {}", email);
            return Err(RegistrationError::EmailTaken.into());
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("Failed to hash password: {}", e))?
            .to_string();

        let user = User {
            id: User::generate_id(),
            name,
            email,
            password_hash,
            created_at: Utc::now().to_rfc3339(),
        };
        if !self.user_repository.store_user(&user).await? {
            warn!("Registration lost a race for email {}", user.email);
            return Err(RegistrationError::EmailTaken.into());
        }

        info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Check credentials and issue a bearer token
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginOutcome> {
        let (email, password) = match (required(request.email), request.password) {
            (Some(email), Some(password)) if !password.is_empty() => (email, password),
            _ => return Err(LoginError::MissingFields.into()),
        };

        let user = self
            .user_repository
            .get_user_by_email(&email)
            .await?
            .ok_or(LoginError::UnknownEmail)?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| anyhow!("Stored password hash for {} is invalid: {}", user.id, e))?;

        if Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_err()
        {
            warn!("Invalid credentials for {}", email);
            return Err(LoginError::WrongPassword.into());
        }

        let token = self.tokens.issue(&user.id, Utc::now().timestamp())?;
        info!("User {} logged in", user.id);

        Ok(LoginOutcome {
            token,
            user_id: user.id,
        })
    }

    /// Resolve a bearer token to the account it was issued for
    pub async fn current_user(&self, token: &str) -> ServiceResult<User> {
        let claims = self
            .tokens
            .verify(token, Utc::now().timestamp())
            .map_err(|e| ServiceError::Unauthorized(e.to_string()))?;

        self.user_repository
            .get_user(&claims.user_id)
            .await?
            .ok_or_else(|| ServiceError::Unauthorized("User no longer exists".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DbConnection;

    async fn setup_test() -> AuthService<DbConnection> {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        AuthService::new(Arc::new(db), TokenIssuer::new(b"test-secret", 3600))
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: Some("Amara".to_string()),
            email: Some(email.to_string()),
            password: Some("s3cret-pass".to_string()),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let service = setup_test().await;
        let user = service.register(register_request("amara@example.com")).await.unwrap();

        assert_eq!(user.email, "amara@example.com");
        assert!(user.password_hash.starts_with("$argon2id$"));
        assert!(!user.password_hash.contains("s3cret-pass"));
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        let service = setup_test().await;
        let mut request = register_request("amara@example.com");
        request.name = Some("   ".to_string());

        let result = service.register(request).await;
        assert!(matches!(result, Err(ServiceError::Validation(ref m)) if m == "All fields are required"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = setup_test().await;
        service.register(register_request("amara@example.com")).await.unwrap();

        let result = service.register(register_request("amara@example.com")).await;
        assert!(matches!(result, Err(ServiceError::Conflict(ref m)) if m == "User already exists"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_for_one_email() {
        let service = setup_test().await;

        for round in 0..5 {
            let email = format!("race{}@example.com", round);
            let (first, second) = tokio::join!(
                service.register(register_request(&email)),
                service.register(register_request(&email))
            );

            let outcomes = [first, second];
            assert!(
                !outcomes.iter().any(|r| matches!(r, Err(ServiceError::Unexpected(_)))),
                "round {} produced a server error",
                round
            );
            assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
            assert!(outcomes
                .iter()
                .any(|r| matches!(r, Err(ServiceError::Conflict(ref m)) if m == "User already exists")));
        }
    }

    #[tokio::test]
    async fn test_login_errors() {
        let service = setup_test().await;
        service.register(register_request("amara@example.com")).await.unwrap();

        let unknown = service.login(login_request("nobody@example.com", "x")).await;
        assert!(matches!(unknown, Err(ServiceError::Auth(ref m)) if m == "User not found"));

        let wrong = service.login(login_request("amara@example.com", "wrong")).await;
        assert!(matches!(wrong, Err(ServiceError::Auth(ref m)) if m == "Invalid credentials"));
    }

    #[tokio::test]
    async fn test_login_token_resolves_current_user() {
        let service = setup_test().await;
        let user = service.register(register_request("amara@example.com")).await.unwrap();

        let outcome = service
            .login(login_request("amara@example.com", "s3cret-pass"))
            .await
            .unwrap();
        assert_eq!(outcome.user_id, user.id);

        let current = service.current_user(&outcome.token).await.unwrap();
        assert_eq!(current.email, "amara@example.com");

        let rejected = service.current_user("not-a-token").await;
        assert!(matches!(rejected, Err(ServiceError::Unauthorized(_))));
    }
}
