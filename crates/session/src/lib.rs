//! `eventdeck-session` — client-side session and identity core.
//!
//! Owns the auth token and its decoded claims, answers "who is logged in",
//! and persists identity across reloads. Transport and durable storage are
//! boundary traits; this crate performs no I/O of its own beyond them.

pub mod api;
pub mod claims;
pub mod identity;
pub mod kv;
pub mod role;
pub mod store;
pub mod token;

pub use api::{ApiError, AuthApi, AuthResponse, Credentials, PasswordReset, Registration, UserProfile};
pub use claims::Claims;
pub use identity::UserId;
pub use kv::{KeyValueStore, MemoryStore};
pub use role::Role;
pub use store::{AuthError, RestoreOutcome, Session, SessionStore, PROFILE_KEY, TOKEN_KEY};
pub use token::{decode, TokenError};

#[cfg(feature = "test-support")]
pub use token::test_support;
