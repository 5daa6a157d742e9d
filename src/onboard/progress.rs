//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, tests, services) to observe
//! the pipeline. Progress is observational only and never affects control flow.

use crate::types::PullRequest;
use async_trait::async_trait;
use std::fmt;

/// Pipeline phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Removing any previous workspace
    ResettingWorkspace,
    /// Cloning the remote repository
    Cloning,
    /// Creating and checking out the new branch
    CreatingBranch,
    /// Moving the caller's file into the tree
    PlacingFile,
    /// Writing the catalog descriptor
    WritingDescriptor,
    /// Staging and committing
    Committing,
    /// Pushing the branch
    Pushing,
    /// Opening the pull request
    CreatingPr,
    /// Onboarding complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ResettingWorkspace => "Resetting workspace",
            Self::Cloning => "Cloning",
            Self::CreatingBranch => "Creating branch",
            Self::PlacingFile => "Placing file",
            Self::WritingDescriptor => "Writing descriptor",
            Self::Committing => "Committing",
            Self::Pushing => "Pushing",
            Self::CreatingPr => "Creating pull request",
            Self::Complete => "Done",
        };
        f.write_str(s)
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during onboarding.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called with each line of git's clone/push progress stream
    async fn on_git_progress(&self, line: &str);

    /// Called once the pull request exists
    async fn on_pr_created(&self, pr: &PullRequest);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_git_progress(&self, _line: &str) {}
    async fn on_pr_created(&self, _pr: &PullRequest) {}
    async fn on_message(&self, _message: &str) {}
}
