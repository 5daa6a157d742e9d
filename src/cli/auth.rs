//! Auth command - test and explain authentication

use crate::cli::style::{check, Stylize};
use anstream::println;
use catalog_onboard::auth::{test_github_auth, Credential, GITHUB_TOKEN_VAR};
use catalog_onboard::error::Result;

/// Run the auth test command
pub async fn run_auth_test(credential: &Credential, host: Option<&str>) -> Result<()> {
    println!("{}", "Testing GitHub authentication...".emphasis());
    let username = test_github_auth(credential, host).await?;
    println!("{} Authenticated as: {}", check(), username.accent());
    println!("{}", format!("Token source: {:?}", credential.source()).muted());
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "GitHub Authentication Setup".emphasis());
    println!("===========================");
    println!();
    println!("Create a personal access token with `repo` scope:");
    println!("  https://github.com/settings/tokens");
    println!();
    println!("Then export it:");
    println!("  export {GITHUB_TOKEN_VAR}=<token>");
    println!();
    println!("The same token authenticates git clone/push and the pull request API.");
    println!();
    println!("For GitHub Enterprise:");
    println!("  Set GH_HOST to your instance hostname");
}
