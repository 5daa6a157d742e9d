//! catalog-onboard - onboard a repository into the catalog
//!
//! Clones a repository, commits a generated `catalog-info.yaml` descriptor plus
//! a caller-provided file on a fresh branch, pushes it, and opens a pull request
//! against the default branch.
//!
//! The pipeline is split into two collaborating pieces:
//! - [`repo::LocalRepositoryMutator`] owns the local clone and every git step
//! - [`platform::PlatformService`] submits the pull request to the hosting API
//!
//! [`onboard::execute_onboarding`] runs them in order and fails fast.

pub mod auth;
pub mod config;
pub mod error;
pub mod onboard;
pub mod platform;
pub mod repo;
pub mod types;
