//! Config command - manage configuration.

use anvaya_store::{
    default_config_dir, default_session_path, default_settings_path, SettingsStore, TokenStorage,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::info;

use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Set the API base URL.
    SetUrl {
        /// Base URL, e.g. https://api.example.org
        url: String,
    },

    /// Choose where the admin token is stored.
    SetStorage {
        /// Storage backend: file or keychain.
        storage: TokenStorage,
    },

    /// Reset to defaults.
    Reset,
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli).await,
        ConfigAction::Path => show_paths(cli),
        ConfigAction::SetUrl { url } => set_url(url).await,
        ConfigAction::SetStorage { storage } => set_storage(*storage).await,
        ConfigAction::Reset => reset_config().await,
    }
}

async fn show_config(cli: &Cli) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    let settings = store.get().await;
    let effective = settings.client_settings(cli.api_url.as_deref());

    match cli.format {
        OutputFormat::Text => {
            println!("Anvaya Configuration");
            println!("{}", "─".repeat(40));
            println!();
            println!(
                "API base URL:  {}",
                settings.api_base_url.as_deref().unwrap_or("(not set)")
            );
            println!("Effective URL: {}", effective.base_url);
            println!("Timeout:       {}s", effective.timeout.as_secs());
            println!("Token storage: {}", settings.token_storage);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "settings": settings,
                "effectiveBaseUrl": effective.base_url,
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(())
}

fn show_paths(cli: &Cli) -> Result<()> {
    let config_dir = default_config_dir();
    let settings_path = default_settings_path();
    let session_path = default_session_path();

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!("Config dir:    {}", config_dir.display());
            println!("Settings file: {}", settings_path.display());
            println!("Session file:  {}", session_path.display());
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_dir": config_dir.display().to_string(),
                "settings_file": settings_path.display().to_string(),
                "session_file": session_path.display().to_string(),
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}

async fn set_url(raw: &str) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    let url = store.set_api_base_url(raw).await?;
    store.save().await?;

    info!(url = %url, "API base URL updated");
    println!("API base URL set to: {url}");

    Ok(())
}

async fn set_storage(storage: TokenStorage) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    store.set_token_storage(storage).await;
    store.save().await?;

    info!(storage = %storage, "Token storage updated");
    println!("Token storage set to: {storage}");
    println!("Run `anvaya login` to store a token in the new location.");

    Ok(())
}

async fn reset_config() -> Result<()> {
    let path = default_settings_path();

    if path.exists() {
        SettingsStore::load(path).await?.reset().await?;
        println!("Configuration reset to defaults");
    } else {
        println!("No configuration file to reset");
    }

    Ok(())
}
