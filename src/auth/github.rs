//! GitHub credential lookup

use crate::auth::Credential;
use crate::error::{Error, Result};
use crate::platform::GitHubService;
use std::env;
use tracing::warn;

/// Environment variable holding the access token
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Read the GitHub credential from the environment
///
/// A missing or empty variable is not an error here: the empty credential is
/// returned and the first remote operation fails to authenticate.
pub fn get_github_credential() -> Credential {
    match env::var(GITHUB_TOKEN_VAR) {
        Ok(token) if !token.trim().is_empty() => Credential::from_env(token.trim().to_string()),
        _ => {
            warn!("{GITHUB_TOKEN_VAR} is not set; remote operations will not be authenticated");
            Credential::missing()
        }
    }
}

/// Test GitHub authentication, returning the login of the token owner
pub async fn test_github_auth(credential: &Credential, host: Option<&str>) -> Result<String> {
    if credential.is_missing() {
        return Err(Error::Auth(format!(
            "No GitHub token found. Set {GITHUB_TOKEN_VAR}"
        )));
    }

    let service = GitHubService::new(credential, host)?;
    service
        .current_user()
        .await
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))
}
