//! Registration, login and token verification

pub mod ports;
pub mod service;

pub use service::AuthService;
