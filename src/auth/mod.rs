//! Authentication for git transport and the GitHub API
//!
//! A single token serves as the HTTPS basic-auth password for git and as the
//! bearer token for the API. It is read once at startup and passed explicitly.

mod github;

pub use github::{get_github_credential, test_github_auth, GITHUB_TOKEN_VAR};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fmt;

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from environment variable
    EnvVar,
    /// Token supplied programmatically
    Explicit,
    /// No token found; remote operations will fail to authenticate
    Missing,
}

/// Opaque access token shared read-only by every remote operation
#[derive(Clone)]
pub struct Credential {
    token: String,
    source: AuthSource,
}

impl Credential {
    /// Wrap a token obtained by the caller
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            source: AuthSource::Explicit,
        }
    }

    /// Credential with no token
    pub const fn missing() -> Self {
        Self {
            token: String::new(),
            source: AuthSource::Missing,
        }
    }

    pub(crate) fn from_env(token: String) -> Self {
        Self {
            token,
            source: AuthSource::EnvVar,
        }
    }

    /// Raw token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Where the token came from
    pub const fn source(&self) -> AuthSource {
        self.source
    }

    /// Whether a token is present
    pub fn is_missing(&self) -> bool {
        self.token.is_empty()
    }

    /// `Authorization` header value for HTTPS basic auth with `username`
    pub fn basic_auth_header(&self, username: &str) -> String {
        let encoded = BASE64.encode(format!("{username}:{}", self.token));
        format!("Basic {encoded}")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}
