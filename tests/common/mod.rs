//! Shared integration test utilities

pub mod fixtures;
pub mod github_api;
pub mod mock_platform;
pub mod progress;
