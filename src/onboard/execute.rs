//! Pipeline execution

use crate::auth::Credential;
use crate::config::OnboardConfig;
use crate::error::Result;
use crate::onboard::{Phase, ProgressCallback};
use crate::platform::PlatformService;
use crate::repo::LocalRepositoryMutator;
use crate::types::{LocalRepository, PullRequest, PullRequestDescriptor};
use tracing::{info, instrument};

/// Result of a successful onboarding run
#[derive(Debug, Clone)]
pub struct OnboardResult {
    /// The local clone and the pushed branch
    pub repository: LocalRepository,
    /// The pull request opened from the branch
    pub pull_request: PullRequest,
}

/// Run the full onboarding pipeline
///
/// The pull request is only attempted after a successful push. A failed PR
/// leaves the pushed branch in place.
#[instrument(skip_all, fields(remote = %config.remote_url, branch = %config.branch))]
pub async fn execute_onboarding(
    config: &OnboardConfig,
    credential: &Credential,
    platform: &dyn PlatformService,
    progress: &dyn ProgressCallback,
) -> Result<OnboardResult> {
    let mutator = LocalRepositoryMutator::new(&config.mutator, credential);
    let repository = mutator
        .mutate_and_push(
            &config.remote_url,
            &config.branch,
            &config.source_file,
            &config.destination,
            progress,
        )
        .await?;

    let pull_request = open_pull_request(platform, &config.pull_request(), progress).await?;

    progress.on_phase(Phase::Complete).await;

    Ok(OnboardResult {
        repository,
        pull_request,
    })
}

/// Open one pull request and report its URL
pub async fn open_pull_request(
    platform: &dyn PlatformService,
    pr: &PullRequestDescriptor,
    progress: &dyn ProgressCallback,
) -> Result<PullRequest> {
    progress.on_phase(Phase::CreatingPr).await;

    let created = platform.create_pr(pr).await?;
    info!(number = created.number, url = %created.html_url, "pull request created");

    progress.on_pr_created(&created).await;
    Ok(created)
}
