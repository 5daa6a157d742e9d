//! Onboarding pipeline
//!
//! Runs the local mutator and, only if the push succeeded, opens the pull
//! request. The first failure aborts the run; completed steps are not undone.

mod execute;
mod progress;

pub use execute::{execute_onboarding, open_pull_request, OnboardResult};
pub use progress::{NoopProgress, Phase, ProgressCallback};
