//! CLI progress callback with styled output

use crate::cli::style::{arrow, check, hyperlink, Stylize};
use anstream::println;
use async_trait::async_trait;
use catalog_onboard::onboard::{Phase, ProgressCallback};
use catalog_onboard::types::PullRequest;

/// CLI progress callback that prints to stdout
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Complete => println!("{} {}", check(), phase.to_string().success()),
            _ => println!("{}...", phase.to_string().emphasis()),
        }
    }

    async fn on_git_progress(&self, line: &str) {
        println!("  {}", line.muted());
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        println!(
            "PR created: {}",
            hyperlink(&pr.html_url).accent()
        );
    }

    async fn on_message(&self, message: &str) {
        println!("{} {message}", arrow());
    }
}
