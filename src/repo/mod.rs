//! Local repository mutator
//!
//! Owns the workspace clone for the duration of one run: reset, clone, branch,
//! file placement, descriptor generation, commit and push.

mod git;
mod mutator;
mod workspace;

pub use git::{Git, ProgressLines};
pub use mutator::LocalRepositoryMutator;
pub use workspace::{reset_workspace, workspace_name, workspace_path};
