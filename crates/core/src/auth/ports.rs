//! Port interfaces for user accounts and credentials
//!
//! Password hashing and token signing are opaque to the core: the service
//! only sees these traits, the concrete algorithms live in infra.

use async_trait::async_trait;
use focusflow_domain::{Result, User};

/// Trait for user account persistence
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user; fails on a duplicate email
    async fn create(&self, user: User) -> Result<()>;

    /// Get a user by lowercased email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Get a user by id
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Store or replace the user's push notification token
    async fn set_fcm_token(&self, user_id: &str, fcm_token: &str) -> Result<()>;
}

/// Trait for opaque password hashing and verification
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Trait for access token issuance and verification
pub trait TokenService: Send + Sync {
    /// Issue a signed token carrying the user id
    fn issue(&self, user_id: &str) -> Result<String>;

    /// Verify a token and return the user id it carries
    fn verify(&self, token: &str) -> Result<String>;
}
