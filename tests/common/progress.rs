//! Progress callback that records everything it is told

#![allow(dead_code)]

use async_trait::async_trait;
use catalog_onboard::onboard::{Phase, ProgressCallback};
use catalog_onboard::types::PullRequest;
use std::sync::Mutex;

/// Records phases, messages, git output and created PR URLs
#[derive(Default)]
pub struct RecordingProgress {
    pub phases: Mutex<Vec<Phase>>,
    pub messages: Mutex<Vec<String>>,
    pub git_lines: Mutex<Vec<String>>,
    pub pr_urls: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn phases(&self) -> Vec<Phase> {
        self.phases.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn pr_urls(&self) -> Vec<String> {
        self.pr_urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }

    async fn on_git_progress(&self, line: &str) {
        self.git_lines.lock().unwrap().push(line.to_string());
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        self.pr_urls.lock().unwrap().push(pr.html_url.clone());
    }

    async fn on_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
