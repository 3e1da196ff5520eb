//! OAuth token handling
//!
//! An empty token means unauthenticated access: no `Authorization` header is
//! sent and GitHub applies the anonymous per-IP rate limit.

use std::fmt;

/// GitHub OAuth token
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OAuthToken(String);

impl OAuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Token for unauthenticated requests
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value for the `Authorization` header, or `None` when unauthenticated
    pub fn header_value(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(format!("token {}", self.0))
        }
    }
}

impl From<String> for OAuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for OAuthToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

// Never print the secret itself.
impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("OAuthToken(<anonymous>)")
        } else {
            f.write_str("OAuthToken(<redacted>)")
        }
    }
}
