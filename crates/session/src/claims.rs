use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// Decoded token payload.
///
/// This is the minimal set of claims the dashboard expects once a token has
/// been decoded. The backend writes the subject under `id`; `sub` is accepted
/// as an alias for interoperability. Timestamps are unix seconds on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier.
    #[serde(rename = "id", alias = "sub")]
    pub sub: UserId,

    /// Email the subject authenticated with.
    pub email: String,

    /// Role granted for the lifetime of this token.
    pub role: Role,

    /// Issued-at timestamp.
    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    /// Single expiry predicate shared by session restore and guard checks.
    ///
    /// Expired claims must be treated the same as no claims everywhere, so
    /// the comparison lives in exactly one place.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
