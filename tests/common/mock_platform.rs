//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use catalog_onboard::error::{Error, Result};
use catalog_onboard::platform::PlatformService;
use catalog_onboard::types::{PullRequest, PullRequestDescriptor};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Simple mock platform service
///
/// - Auto-incrementing PR numbers
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    next_pr_number: AtomicU64,
    create_pr_calls: Mutex<Vec<PullRequestDescriptor>>,
    error_on_create_pr: Mutex<Option<String>>,
}

impl Default for MockPlatformService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPlatformService {
    /// Create a new mock
    pub fn new() -> Self {
        Self {
            next_pr_number: AtomicU64::new(1),
            create_pr_calls: Mutex::new(Vec::new()),
            error_on_create_pr: Mutex::new(None),
        }
    }

    /// Make `create_pr` return an error
    pub fn fail_create_pr(&self, msg: &str) {
        *self.error_on_create_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Get all `create_pr` calls
    pub fn get_create_pr_calls(&self) -> Vec<PullRequestDescriptor> {
        self.create_pr_calls.lock().unwrap().clone()
    }

    /// Assert that `create_pr` was called with specific head and base
    pub fn assert_create_pr_called(&self, head: &str, base: &str) {
        let calls = self.get_create_pr_calls();
        assert!(
            calls
                .iter()
                .any(|c| c.head_branch == head && c.base_branch == base),
            "Expected create_pr({head}, {base}) but got: {calls:?}"
        );
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn create_pr(&self, pr: &PullRequestDescriptor) -> Result<PullRequest> {
        self.create_pr_calls.lock().unwrap().push(pr.clone());

        // Check for injected error
        if let Some(msg) = self.error_on_create_pr.lock().unwrap().as_ref() {
            return Err(Error::PullRequestCreate {
                head: pr.head_branch.clone(),
                base: pr.base_branch.clone(),
                source: msg.clone().into(),
            });
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!("https://github.com/{}/{}/pull/{number}", pr.owner, pr.repo),
            base_ref: pr.base_branch.clone(),
            head_ref: pr.head_branch.clone(),
            title: pr.title.clone(),
        })
    }
}
