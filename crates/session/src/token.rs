//! Unsigned decoding of compact-form JWTs.
//!
//! The dashboard trusts the transport layer for token integrity; claims are
//! decoded purely for display and local gating. Signature verification
//! happens server-side on every API call, so a forged token buys nothing
//! beyond rendering screens whose data requests will all be rejected.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

use crate::Claims;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token is not in `header.payload.signature` compact form.
    #[error("token is not in compact JWT form")]
    NotCompact,

    /// The payload segment is not valid unpadded base64url.
    #[error("token payload is not valid base64url")]
    Encoding,

    /// The payload decoded but the claims are missing or malformed.
    #[error("token claims failed to parse: {0}")]
    Claims(String),
}

/// Decode the claims of a compact-form JWT without verifying its signature.
///
/// Deterministic and side-effect free. Callers treat any error as "no
/// session" and clear persisted state; the error detail is for logs only.
pub fn decode(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(TokenError::NotCompact),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Encoding)?;

    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}

/// Test-only token issuer.
///
/// Produces a structurally valid compact JWT with an unverifiable signature,
/// enough for exercising `decode` and the session store against stub APIs.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

    use crate::Claims;

    pub fn issue(claims: &Claims) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload =
            URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).expect("claims serialize"));
        format!("{header}.{payload}.unsigned")
    }
}
