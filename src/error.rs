//! Error types for catalog-onboard

use crate::onboard::Phase;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error for causes coming from heterogeneous backends
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a `git` subprocess
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be started
    #[error("failed to run `git {command}`")]
    Spawn {
        /// Arguments passed to git
        command: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// git ran but exited unsuccessfully
    #[error("`git {command}` failed ({status}): {stderr}")]
    Failed {
        /// Arguments passed to git
        command: String,
        /// Exit status as reported by the OS
        status: String,
        /// Trailing stderr output, trimmed
        stderr: String,
    },
}

/// Errors raised by the onboarding pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// The workspace directory could not be removed before cloning
    #[error("failed to reset workspace {}", path.display())]
    WorkspaceReset {
        /// Workspace path
        path: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Cloning the remote repository failed (bad token, unreachable host, missing repo)
    #[error("failed to clone repository {url}")]
    Clone {
        /// Remote URL being cloned
        url: String,
        /// Transport or auth failure reported by git
        #[source]
        source: GitError,
    },

    /// Creating or checking out the new branch failed
    #[error("failed to create branch '{branch}'")]
    BranchCreate {
        /// Branch name
        branch: String,
        /// Underlying git failure
        #[source]
        source: BoxError,
    },

    /// The branch already exists in the fresh clone and would be overwritten
    #[error("branch '{0}' already exists locally")]
    BranchExists(String),

    /// Moving the caller's file into the working tree failed
    #[error("failed to move {} to {}", from.display(), to.display())]
    FilePlacement {
        /// Source file (consumed on success)
        from: PathBuf,
        /// Destination inside the workspace
        to: PathBuf,
        /// Underlying filesystem error
        #[source]
        source: std::io::Error,
    },

    /// Serializing or writing the catalog descriptor failed
    #[error("failed to write descriptor {}", path.display())]
    DescriptorWrite {
        /// Descriptor path inside the workspace
        path: PathBuf,
        /// Serialization or filesystem error
        #[source]
        source: BoxError,
    },

    /// Staging or committing failed
    #[error("failed to commit changes")]
    Commit {
        /// Underlying git failure
        #[source]
        source: GitError,
    },

    /// The staged tree is identical to HEAD
    #[error("nothing to commit on branch '{branch}': working tree matches HEAD")]
    NothingToCommit {
        /// Branch being committed to
        branch: String,
    },

    /// The remote rejected the push, or the transport failed
    #[error("failed to push '{branch}' to {remote}")]
    Push {
        /// Branch being pushed
        branch: String,
        /// Remote name
        remote: String,
        /// Underlying git failure
        #[source]
        source: GitError,
    },

    /// The branch is already present on the remote
    #[error("branch '{branch}' already exists on {remote}; choose a new branch name or delete the remote branch")]
    RemoteBranchExists {
        /// Branch being pushed
        branch: String,
        /// Remote name
        remote: String,
    },

    /// The hosting API refused to create the pull request
    #[error("failed to create pull request {head} -> {base}")]
    PullRequestCreate {
        /// Head branch
        head: String,
        /// Base branch
        base: String,
        /// Error returned by the API, unchanged
        #[source]
        source: BoxError,
    },

    /// Authentication error
    #[error("authentication error: {0}")]
    Auth(String),

    /// GitHub client construction error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Pipeline phase this error belongs to, if it came from the pipeline
    pub const fn phase(&self) -> Option<Phase> {
        match self {
            Self::WorkspaceReset { .. } => Some(Phase::ResettingWorkspace),
            Self::Clone { .. } => Some(Phase::Cloning),
            Self::BranchCreate { .. } | Self::BranchExists(_) => Some(Phase::CreatingBranch),
            Self::FilePlacement { .. } => Some(Phase::PlacingFile),
            Self::DescriptorWrite { .. } => Some(Phase::WritingDescriptor),
            Self::Commit { .. } | Self::NothingToCommit { .. } => Some(Phase::Committing),
            Self::Push { .. } | Self::RemoteBranchExists { .. } => Some(Phase::Pushing),
            Self::PullRequestCreate { .. } => Some(Phase::CreatingPr),
            Self::Auth(_) | Self::GitHubApi(_) | Self::Parse(_) => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
