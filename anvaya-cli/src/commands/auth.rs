//! Login, logout and whoami commands.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use super::connect;
use crate::navigator::{LOGIN_LOCATION, PUBLIC_LOCATION};
use crate::output::{emit, SessionOutput};
use crate::Cli;

/// Arguments for the login command.
#[derive(Args)]
pub struct LoginArgs {
    /// Admin username.
    #[arg(long, short)]
    pub username: String,

    /// Admin password. Prompted for when omitted; the prompt echoes input,
    /// so set ANVAYA_ADMIN_PASSWORD to keep it off the terminal.
    #[arg(long, env = "ANVAYA_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Runs the login command.
pub async fn login(args: &LoginArgs, cli: &Cli) -> Result<()> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt_password()?,
    };

    let (client, settings) = connect(cli, LOGIN_LOCATION).await?;
    let token = client.login(&args.username, &password).await?;
    info!(username = %args.username, storage = %settings.token_storage, "Admin session stored");

    let result = serde_json::json!({
        "authenticated": true,
        "tokenType": token.token_type,
        "tokenStorage": settings.token_storage.as_str(),
    });
    emit(cli, &result, |f| {
        f.format_success(&format!("Logged in as {}", args.username))
    })
}

/// Runs the logout command.
pub async fn logout(cli: &Cli) -> Result<()> {
    let (client, _) = connect(cli, PUBLIC_LOCATION).await?;
    let was_authenticated = client.is_authenticated().await;
    client.logout().await;

    let result = serde_json::json!({ "authenticated": false });
    emit(cli, &result, |f| {
        if was_authenticated {
            f.format_success("Logged out")
        } else {
            f.format_success("No active session")
        }
    })
}

/// Runs the whoami command.
pub async fn whoami(cli: &Cli) -> Result<()> {
    let (client, settings) = connect(cli, PUBLIC_LOCATION).await?;
    let authenticated = client.is_authenticated().await;
    let base_url = client.http().base_url().as_str().trim_end_matches('/').to_string();

    let output = SessionOutput {
        api_base_url: &base_url,
        authenticated,
        token_storage: settings.token_storage.as_str(),
    };
    emit(cli, &output, |f| {
        f.format_session(&base_url, authenticated, settings.token_storage.as_str())
    })
}

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
