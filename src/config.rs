//! Onboarding configuration
//!
//! Every value the pipeline treats as fixed policy lives here as a named field.
//! [`OnboardConfig::default`] reproduces the values the tool has always used,
//! so an unconfigured run onboards `euforic/tester` exactly as before.

use crate::types::PullRequestDescriptor;
use std::path::PathBuf;

/// Default remote repository
pub const DEFAULT_REMOTE_URL: &str = "https://github.com/euforic/tester";

/// Default branch created in the clone
pub const DEFAULT_BRANCH: &str = "add-catalog-info";

/// Name of the generated descriptor at the workspace root
pub const DESCRIPTOR_FILE: &str = "catalog-info.yaml";

/// Author identity and message for the onboarding commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity {
    /// Commit message
    pub message: String,
    /// Author (and committer) name
    pub author_name: String,
    /// Author (and committer) email
    pub author_email: String,
}

impl Default for CommitIdentity {
    fn default() -> Self {
        Self {
            message: "Add new file".to_string(),
            author_name: "Your Name".to_string(),
            author_email: "you@example.com".to_string(),
        }
    }
}

/// Placeholder usernames paired with the token for HTTPS basic auth
///
/// GitHub ignores the username when the password is a token, but it must not be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitAuthUsers {
    /// Username used when cloning
    pub clone: String,
    /// Username used when pushing
    pub push: String,
}

impl Default for GitAuthUsers {
    fn default() -> Self {
        Self {
            clone: "git".to_string(),
            push: "Your GitHub username".to_string(),
        }
    }
}

/// Settings owned by the local repository mutator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutatorSettings {
    /// Directory under which the workspace is created
    pub workspace_root: PathBuf,
    /// Remote to push to
    pub remote_name: String,
    /// Descriptor filename at the workspace root
    pub descriptor_file: String,
    /// Commit identity
    pub commit: CommitIdentity,
    /// Basic auth usernames
    pub auth_users: GitAuthUsers,
}

impl Default for MutatorSettings {
    fn default() -> Self {
        Self {
            workspace_root: PathBuf::from("/tmp"),
            remote_name: "origin".to_string(),
            descriptor_file: DESCRIPTOR_FILE.to_string(),
            commit: CommitIdentity::default(),
            auth_users: GitAuthUsers::default(),
        }
    }
}

/// Full configuration for one onboarding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardConfig {
    /// Repository to clone
    pub remote_url: String,
    /// Branch to create and push
    pub branch: String,
    /// File moved into the working tree (consumed)
    pub source_file: PathBuf,
    /// Destination of the source file, relative to the workspace root
    pub destination: PathBuf,
    /// Owner of the repository receiving the PR
    pub owner: String,
    /// Repository receiving the PR
    pub repo: String,
    /// Branch the PR targets
    pub base_branch: String,
    /// PR title
    pub pr_title: String,
    /// PR body
    pub pr_body: String,
    /// GitHub Enterprise host (None for github.com)
    pub api_host: Option<String>,
    /// Explicit API base URL, used instead of the one derived from `api_host`
    pub api_url: Option<String>,
    /// Local mutator settings
    pub mutator: MutatorSettings,
}

impl Default for OnboardConfig {
    fn default() -> Self {
        Self {
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            source_file: PathBuf::from("run.go"),
            destination: PathBuf::from("run.go"),
            owner: "euforic".to_string(),
            repo: "tester".to_string(),
            base_branch: "main".to_string(),
            pr_title: "Add catalog-info.yaml".to_string(),
            pr_body: "Add catalog-info.yaml".to_string(),
            api_host: None,
            api_url: None,
            mutator: MutatorSettings::default(),
        }
    }
}

impl OnboardConfig {
    /// Build the pull request submitted after the branch is pushed
    pub fn pull_request(&self) -> PullRequestDescriptor {
        PullRequestDescriptor {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            head_branch: self.branch.clone(),
            base_branch: self.base_branch.clone(),
            title: self.pr_title.clone(),
            body: self.pr_body.clone(),
        }
    }
}
