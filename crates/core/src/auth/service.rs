//! Auth service - registration, login, profile

use std::sync::Arc;

use focusflow_domain::{FocusFlowError, Result, User};
use tracing::info;
use uuid::Uuid;

use super::ports::{PasswordHasher, TokenService, UserRepository};

/// Uniform message for both unknown-email and wrong-password failures so the
/// response does not reveal which one occurred.
const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Authentication service
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self { users, hasher, tokens }
    }

    /// Register a new account and issue its first token
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        now: i64,
    ) -> Result<(User, String)> {
        let email = email.trim().to_lowercase();
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(FocusFlowError::Conflict("email already registered".to_string()));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email,
            password_hash: self.hasher.hash(password)?,
            fcm_token: None,
            created_at: now,
            updated_at: now,
        };
        self.users.create(user.clone()).await?;
        info!(user_id = %user.id, "user registered");

        let token = self.tokens.issue(&user.id)?;
        Ok((user, token))
    }

    /// Verify credentials and issue a token
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        let email = email.trim().to_lowercase();
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| FocusFlowError::Auth(INVALID_CREDENTIALS.to_string()))?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(FocusFlowError::Auth(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue(&user.id)?;
        Ok((user, token))
    }

    /// Load the authenticated user's profile
    pub async fn me(&self, user_id: &str) -> Result<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| FocusFlowError::NotFound("user not found".to_string()))
    }

    /// Verify a bearer token and load the user it belongs to
    ///
    /// Fails with an auth error when the token is invalid or the user no
    /// longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<User> {
        let user_id = self.tokens.verify(token)?;
        self.users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| FocusFlowError::Auth("user no longer exists".to_string()))
    }

    /// Store the user's push notification token
    pub async fn update_fcm_token(&self, user_id: &str, fcm_token: &str) -> Result<()> {
        self.users.set_fcm_token(user_id, fcm_token).await
    }
}
