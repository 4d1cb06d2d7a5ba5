//! Token types

use std::fmt;

/// An opaque bearer token issued by the identity provider.
///
/// Lives only in process memory, owned by the authorization layer. The
/// `Debug` impl truncates the token so it stays out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` request header.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() > 12 {
            write!(f, "AccessToken({}...)", &self.0[..8])
        } else {
            write!(f, "AccessToken(...)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bearer_header_value() {
        let token = AccessToken::new("abc123");
        assert_eq!(token.authorization_value(), "Bearer abc123");
        assert_eq!(token.as_str(), "abc123");
    }

    #[test]
    fn debug_never_prints_full_token() {
        let token = AccessToken::new("super-secret-token-material");
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret-token-material"));
    }
}
