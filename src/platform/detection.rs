//! Repository coordinates from remote URLs

use crate::error::{Error, Result};
use crate::types::PlatformConfig;
use regex::Regex;
use std::env;
use std::sync::LazyLock;

static RE_SSH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"git@[^:]+:(.+?)(?:\.git)?/?$").expect("valid regex"));
static RE_HTTPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^/]+/(.+?)(?:\.git)?/?$").expect("valid regex"));

/// Whether the URL points at github.com or the GitHub Enterprise host in `GH_HOST`
pub fn is_github_remote(url: &str) -> bool {
    let gh_host = env::var("GH_HOST").ok();

    extract_hostname(url).is_some_and(|hostname| {
        hostname == "github.com"
            || hostname.ends_with(".github.com")
            || gh_host.as_ref().is_some_and(|h| hostname == *h)
    })
}

/// GitHub Enterprise host of a GitHub remote
///
/// `None` for github.com and for URLs that are not GitHub remotes at all.
pub fn enterprise_host(url: &str) -> Option<String> {
    if !is_github_remote(url) {
        return None;
    }
    extract_hostname(url).filter(|h| h != "github.com")
}

/// Parse repository info (owner/repo) from a GitHub remote URL
pub fn parse_repo_info(url: &str) -> Result<PlatformConfig> {
    if !is_github_remote(url) {
        return Err(Error::Parse(format!("not a GitHub remote: {url}")));
    }
    // SSH format: git@host:owner/repo.git
    // HTTPS format: https://host/owner/repo.git
    let path = RE_SSH
        .captures(url)
        .or_else(|| RE_HTTPS.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Parse(format!("cannot parse remote URL: {url}")))?;

    let Some((owner, repo)) = path.split_once('/') else {
        return Err(Error::Parse(format!("invalid repo path: {path}")));
    };
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return Err(Error::Parse(format!("invalid repo path: {path}")));
    }

    Ok(PlatformConfig {
        owner: owner.to_string(),
        repo: repo.to_string(),
        host: enterprise_host(url),
    })
}

fn extract_hostname(url: &str) -> Option<String> {
    // SSH format
    if url.starts_with("git@") {
        return url
            .strip_prefix("git@")
            .and_then(|s| s.split(':').next())
            .map(ToString::to_string);
    }

    // HTTPS format
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}
