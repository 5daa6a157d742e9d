//! End-to-end test with the real GitHub API
//!
//! These tests require:
//! - `ONBOARD_E2E_TESTS=1` environment variable
//! - `GITHUB_TOKEN` with repo scope
//! - `ONBOARD_E2E_REPO=owner/repo`, a scratch repository with a `main` branch
//! - `gh` CLI authenticated (used for cleanup)
//!
//! Run with: `ONBOARD_E2E_TESTS=1 cargo test --test e2e_tests -- --include-ignored`

use catalog_onboard::auth::get_github_credential;
use catalog_onboard::config::{MutatorSettings, OnboardConfig};
use catalog_onboard::error::Error;
use catalog_onboard::onboard::{execute_onboarding, NoopProgress};
use catalog_onboard::platform::GitHubService;
use std::env;
use std::process::Command;
use tempfile::TempDir;
use uuid::Uuid;

/// Check if E2E tests should run
fn e2e_enabled() -> bool {
    env::var("ONBOARD_E2E_TESTS").is_ok()
}

/// Generate unique branch name
fn unique_branch() -> String {
    let id = Uuid::new_v4().to_string()[..8].to_string();
    format!("e2e-onboard-{id}")
}

/// Deleting the head branch also closes its PR
fn delete_branch(repo_spec: &str, branch: &str) {
    let _ = Command::new("gh")
        .args([
            "api",
            "-X",
            "DELETE",
            &format!("repos/{repo_spec}/git/refs/heads/{branch}"),
        ])
        .output();
}

#[tokio::test]
#[ignore = "requires GitHub credentials and a scratch repository"]
async fn test_onboard_real_repository_twice() {
    if !e2e_enabled() {
        return;
    }
    let repo_spec = env::var("ONBOARD_E2E_REPO").expect("ONBOARD_E2E_REPO=owner/repo");
    let (owner, repo) = repo_spec.split_once('/').expect("owner/repo");

    let dir = TempDir::new().unwrap();
    let branch = unique_branch();
    let source = dir.path().join("run.go");
    std::fs::write(&source, format!("// {branch}\npackage main\n")).unwrap();

    let config = OnboardConfig {
        remote_url: format!("https://github.com/{repo_spec}"),
        branch: branch.clone(),
        source_file: source.clone(),
        owner: owner.to_string(),
        repo: repo.to_string(),
        mutator: MutatorSettings {
            workspace_root: dir.path().join("work"),
            ..MutatorSettings::default()
        },
        ..OnboardConfig::default()
    };

    let credential = get_github_credential();
    let platform = GitHubService::new(&credential, None).unwrap();

    let result = execute_onboarding(&config, &credential, &platform, &NoopProgress).await;
    std::fs::write(&source, "package main\n").unwrap();
    let second = execute_onboarding(&config, &credential, &platform, &NoopProgress).await;
    delete_branch(&repo_spec, &branch);

    let result = result.unwrap();
    assert!(result.pull_request.html_url.contains("/pull/"));
    assert_eq!(result.pull_request.head_ref, branch);
    assert!(matches!(second, Err(Error::RemoteBranchExists { .. })));
}
