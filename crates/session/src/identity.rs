use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Subject identifier of an authenticated user.
///
/// Opaque at this layer: the backend issues its own id format inside the
/// token and we never generate, parse, or order these client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Cow<'static, str>);

impl UserId {
    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(Cow::Owned(value.to_string()))
    }
}
