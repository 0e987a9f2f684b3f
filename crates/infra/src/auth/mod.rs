//! Credential adapters
//!
//! Concrete password hashing and token signing behind the core's
//! credential ports.

pub mod password;
pub mod token;

pub use password::Argon2PasswordHasher;
pub use token::JwtTokenService;
