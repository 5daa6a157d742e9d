//! onboard - add a catalog descriptor to a repository and open a pull request
//!
//! CLI binary for the onboarding pipeline.

use anyhow::Result;
use catalog_onboard::auth::get_github_credential;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "onboard")]
#[command(about = "Onboard a repository: push a catalog-info.yaml branch and open a PR")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    args: cli::OnboardArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test {
        /// GitHub Enterprise host
        #[arg(long)]
        host: Option<String>,
    },
    /// Show authentication setup instructions
    Setup,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => {
            // Default: run the onboarding pipeline
            let credential = get_github_credential();
            cli::run_onboard(cli.args, &credential).await?;
        }
        Some(Commands::Auth { action }) => match action {
            AuthAction::Test { host } => {
                let credential = get_github_credential();
                cli::run_auth_test(&credential, host.as_deref()).await?;
            }
            AuthAction::Setup => cli::run_auth_setup(),
        },
    }

    Ok(())
}
