//! Remote submission client
//!
//! Opens the pull request once the branch has been pushed.

mod detection;
mod github;

pub use detection::{enterprise_host, is_github_remote, parse_repo_info};
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{PullRequest, PullRequestDescriptor};
use async_trait::async_trait;

/// Platform service trait for PR operations
///
/// Implementations make exactly one remote call per invocation and return the
/// API's error without retrying or interpreting it.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Create a pull request from `pr.head_branch` into `pr.base_branch`
    async fn create_pr(&self, pr: &PullRequestDescriptor) -> Result<PullRequest>;
}
