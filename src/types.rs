//! Core types for catalog-onboard

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// API version written into every descriptor
pub const CATALOG_API_VERSION: &str = "catalog.cattle.io/v1";

/// Kind written into every descriptor
pub const CATALOG_KIND: &str = "Catalog";

/// The catalog metadata file injected into onboarded repositories
///
/// Always regenerated with constant values; never read back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDescriptor {
    /// Descriptor schema version
    pub api_version: String,
    /// Descriptor kind
    pub kind: String,
}

impl Default for CatalogDescriptor {
    fn default() -> Self {
        Self {
            api_version: CATALOG_API_VERSION.to_string(),
            kind: CATALOG_KIND.to_string(),
        }
    }
}

impl CatalogDescriptor {
    /// Serialize to the YAML text written into the workspace
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Everything needed to open one pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDescriptor {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch with the changes
    pub head_branch: String,
    /// Branch to merge into
    pub base_branch: String,
    /// PR title
    pub title: String,
    /// PR body
    pub body: String,
}

/// A created pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}

/// Handle to the local clone after a successful push
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalRepository {
    /// Workspace directory holding the clone
    pub path: PathBuf,
    /// Branch that was created and pushed
    pub branch: String,
    /// Commit the branch was created from
    pub base_commit: String,
    /// The new commit on the branch
    pub commit: String,
}

/// Repository coordinates parsed from a remote URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}
