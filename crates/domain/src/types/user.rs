//! User account types

use serde::{Deserialize, Serialize};

/// Registered user account
///
/// The password hash never leaves the service layer: it is skipped during
/// serialization so API responses cannot leak it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Stored lowercased; unique across all users
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Push notification token, if the client registered one
    pub fcm_token: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}
