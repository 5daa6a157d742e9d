//! CLI commands
//!
//! Command implementations for the `onboard` binary.

mod auth;
mod onboard;
mod progress;
mod style;

pub use auth::{run_auth_setup, run_auth_test};
pub use onboard::{run_onboard, OnboardArgs};
