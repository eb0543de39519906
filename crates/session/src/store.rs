use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::api::{ApiError, AuthApi, AuthResponse, Credentials, PasswordReset, Registration, UserProfile};
use crate::kv::KeyValueStore;
use crate::token::{self, TokenError};
use crate::{Claims, Role};

/// Storage key for the raw auth token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the cached user profile shown while offline.
pub const PROFILE_KEY: &str = "user";

/// The backend issues 7-day tokens; persisted copies get the same lifetime.
const TOKEN_TTL_DAYS: i64 = 7;

/// An established session. Token and claims travel together: holding a
/// `Session` means the token decoded and was unexpired when installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
}

/// Failure of a login / register / reset attempt. The session is unchanged
/// whenever one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Server-provided rejection message, shown to the user verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The request never completed.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server's response carried a token we cannot decode.
    #[error("unusable token from server: {0}")]
    BadToken(#[from] TokenError),

    /// The server's response carried a token that is already expired.
    #[error("server issued an already-expired token")]
    ExpiredToken,
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected(message) => AuthError::Rejected(message),
            ApiError::Transport(message) => AuthError::Transport(message),
        }
    }
}

/// What `restore` found in persistent storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A valid persisted token; the session is live again.
    Active,
    /// Nothing usable persisted.
    Absent,
    /// A persisted token had expired; storage was cleared. Callers may show
    /// a soft "please log in again" notice, or treat this as `Absent`.
    Expired,
}

/// Single source of truth for "who is logged in".
///
/// Construct one per application, run `restore` before the first guard
/// decision, and route every mutation through `login` / `register` /
/// `reset_password` / `logout`. All reads are infallible.
#[derive(Debug)]
pub struct SessionStore<K: KeyValueStore> {
    storage: K,
    session: Option<Session>,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(storage: K) -> Self {
        Self {
            storage,
            session: None,
        }
    }

    /// Rehydrate the session from persisted state. No network call.
    ///
    /// A token that fails to decode or has expired is cleared on the spot;
    /// decode failures are recovered silently (logged, never surfaced).
    pub fn restore(&mut self, now: DateTime<Utc>) -> RestoreOutcome {
        let Some(raw) = self.storage.get(TOKEN_KEY) else {
            self.session = None;
            return RestoreOutcome::Absent;
        };

        match token::decode(&raw) {
            Err(err) => {
                tracing::debug!(error = %err, "discarding undecodable persisted token");
                self.discard();
                RestoreOutcome::Absent
            }
            Ok(claims) if claims.is_expired(now) => {
                tracing::debug!(expired_at = %claims.expires_at, "persisted token expired");
                self.discard();
                RestoreOutcome::Expired
            }
            Ok(claims) => {
                tracing::debug!(role = %claims.role, "session restored");
                self.session = Some(Session { token: raw, claims });
                RestoreOutcome::Active
            }
        }
    }

    /// Authenticate against the backend and establish a session.
    ///
    /// On any error the current session and persisted state are untouched.
    pub fn login(
        &mut self,
        api: &dyn AuthApi,
        credentials: &Credentials,
        now: DateTime<Utc>,
    ) -> Result<&Session, AuthError> {
        let AuthResponse { token, user } = api.login(credentials)?;
        self.install(token, Some(user), now)
    }

    /// Create an account and establish a session, same contract as `login`.
    pub fn register(
        &mut self,
        api: &dyn AuthApi,
        registration: &Registration,
        now: DateTime<Utc>,
    ) -> Result<&Session, AuthError> {
        let AuthResponse { token, user } = api.register(registration)?;
        self.install(token, Some(user), now)
    }

    /// Complete a password reset; the backend hands back a fresh token which
    /// replaces the current session. The cached profile is kept.
    pub fn reset_password(
        &mut self,
        api: &dyn AuthApi,
        reset: &PasswordReset,
        now: DateTime<Utc>,
    ) -> Result<&Session, AuthError> {
        let token = api.reset_password(reset)?;
        self.install(token, None, now)
    }

    /// Clear the session and all persisted identity. Idempotent; no network
    /// effect (the backend holds no server-side session to invalidate).
    pub fn logout(&mut self) {
        if self.session.is_some() {
            tracing::debug!("logging out");
        }
        self.discard();
    }

    /// Role of the current user, if any. Never fails.
    pub fn current_role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.claims.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.session.as_ref().map(|s| &s.claims)
    }

    /// Profile cached at login time, for display without a network round
    /// trip. Unparsable cache entries read as absent.
    pub fn cached_profile(&self) -> Option<UserProfile> {
        let raw = self.storage.get(PROFILE_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn storage(&self) -> &K {
        &self.storage
    }

    fn install(
        &mut self,
        token: String,
        profile: Option<UserProfile>,
        now: DateTime<Utc>,
    ) -> Result<&Session, AuthError> {
        let claims = token::decode(&token)?;
        if claims.is_expired(now) {
            return Err(AuthError::ExpiredToken);
        }

        self.storage
            .set(TOKEN_KEY, &token, Some(Duration::days(TOKEN_TTL_DAYS)));
        if let Some(profile) = profile {
            if let Ok(raw) = serde_json::to_string(&profile) {
                self.storage
                    .set(PROFILE_KEY, &raw, Some(Duration::days(TOKEN_TTL_DAYS)));
            }
        }

        tracing::info!(role = %claims.role, email = %claims.email, "session established");
        Ok(&*self.session.insert(Session { token, claims }))
    }

    fn discard(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(PROFILE_KEY);
        self.session = None;
    }
}
