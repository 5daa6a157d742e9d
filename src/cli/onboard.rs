//! Onboard command - push the catalog branch and open the pull request

use crate::cli::progress::CliProgress;
use crate::cli::style::Stylize;
use anstream::println;
use catalog_onboard::auth::Credential;
use catalog_onboard::config::OnboardConfig;
use catalog_onboard::error::{Error, Result};
use catalog_onboard::onboard::execute_onboarding;
use catalog_onboard::platform::{enterprise_host, parse_repo_info, GitHubService};
use clap::Args;
use std::path::PathBuf;

/// Overrides for the onboarding defaults
///
/// Every flag is optional; with none given the tool onboards its built-in target.
#[derive(Args, Debug, Default)]
pub struct OnboardArgs {
    /// Repository to clone [default: https://github.com/euforic/tester]
    #[arg(long)]
    pub repo_url: Option<String>,

    /// Branch to create [default: add-catalog-info]
    #[arg(long)]
    pub branch: Option<String>,

    /// File to move into the repository (consumed) [default: run.go]
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Destination inside the repository [default: same as the source file name]
    #[arg(long)]
    pub destination: Option<PathBuf>,

    /// Owner receiving the PR [default: parsed from --repo-url]
    #[arg(long)]
    pub owner: Option<String>,

    /// Repository receiving the PR [default: parsed from --repo-url]
    #[arg(long)]
    pub repo: Option<String>,

    /// Base branch for the PR [default: main]
    #[arg(long)]
    pub base: Option<String>,

    /// PR title [default: Add catalog-info.yaml]
    #[arg(long)]
    pub title: Option<String>,

    /// PR body [default: Add catalog-info.yaml]
    #[arg(long)]
    pub body: Option<String>,

    /// Directory the workspace is created under [default: /tmp]
    #[arg(long)]
    pub workspace_root: Option<PathBuf>,

    /// GitHub API base URL [default: derived from --repo-url]
    #[arg(long)]
    pub api_url: Option<String>,
}

impl OnboardArgs {
    /// Apply the overrides on top of [`OnboardConfig::default`]
    pub fn into_config(self) -> Result<OnboardConfig> {
        let mut config = OnboardConfig::default();

        if let Some(url) = self.repo_url {
            // A new remote invalidates the default owner/repo and host
            match parse_repo_info(&url) {
                Ok(parsed) => {
                    config.owner = parsed.owner;
                    config.repo = parsed.repo;
                    config.api_host = parsed.host;
                }
                Err(_) if self.owner.is_some() && self.repo.is_some() => {
                    config.api_host = enterprise_host(&url);
                }
                Err(_) => {
                    return Err(Error::Parse(format!(
                        "cannot derive owner/repo from {url}; pass --owner and --repo"
                    )));
                }
            }
            config.remote_url = url;
        }
        if let Some(owner) = self.owner {
            config.owner = owner;
        }
        if let Some(repo) = self.repo {
            config.repo = repo;
        }
        if let Some(branch) = self.branch {
            config.branch = branch;
        }
        if let Some(source) = self.source {
            if self.destination.is_none() {
                if let Some(name) = source.file_name() {
                    config.destination = PathBuf::from(name);
                }
            }
            config.source_file = source;
        }
        if let Some(destination) = self.destination {
            config.destination = destination;
        }
        if let Some(base) = self.base {
            config.base_branch = base;
        }
        if let Some(title) = self.title {
            config.pr_title = title;
        }
        if let Some(body) = self.body {
            config.pr_body = body;
        }
        if let Some(root) = self.workspace_root {
            config.mutator.workspace_root = root;
        }
        config.api_url = self.api_url;

        Ok(config)
    }
}

/// Run the onboard command
pub async fn run_onboard(args: OnboardArgs, credential: &Credential) -> Result<()> {
    let config = args.into_config()?;

    println!(
        "Onboarding {} on branch {}",
        config.remote_url.accent(),
        config.branch.accent()
    );
    println!();

    let platform = match &config.api_url {
        Some(url) => GitHubService::with_base_url(credential, url)?,
        None => GitHubService::new(credential, config.api_host.as_deref())?,
    };
    let result = execute_onboarding(&config, credential, &platform, &CliProgress).await?;

    println!();
    println!(
        "{}",
        format!(
            "Workspace: {} ({} -> {})",
            result.repository.path.display(),
            short(&result.repository.base_commit),
            short(&result.repository.commit)
        )
        .muted()
    );

    Ok(())
}

fn short(commit: &str) -> &str {
    &commit[..8.min(commit.len())]
}
