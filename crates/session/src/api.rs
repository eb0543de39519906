//! Boundary contract for the authentication endpoints of the REST backend.
//!
//! Only the auth endpoints are modelled; the CRUD surface for events,
//! categories, users, and tickets never touches the session core. Transport,
//! base URLs, bearer-header plumbing, and timeouts all belong to the
//! implementation behind this trait.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Role, UserId};

/// Login request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Signup request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Final step of the password-reset flow (after the emailed code has been
/// verified). The backend answers with a fresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReset {
    pub email: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

/// User object returned beside the token and cached for offline display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, alias = "_id")]
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Successful login/register response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(alias = "data")]
    pub user: UserProfile,
}

/// Failure surfaced by an auth endpoint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server rejected the request; the message is shown to the user
    /// verbatim, no retry.
    #[error("{0}")]
    Rejected(String),

    /// The request never got a usable response.
    #[error("transport error: {0}")]
    Transport(String),
}

/// The auth endpoints of the backend.
pub trait AuthApi {
    fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError>;

    fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError>;

    /// Request a reset code be emailed to `email`.
    fn forgot_password(&self, email: &str) -> Result<(), ApiError>;

    /// Verify the emailed reset code before allowing a password reset.
    fn verify_reset_code(&self, code: &str) -> Result<(), ApiError>;

    /// Set a new password; returns the fresh token the server issues.
    fn reset_password(&self, reset: &PasswordReset) -> Result<String, ApiError>;
}
