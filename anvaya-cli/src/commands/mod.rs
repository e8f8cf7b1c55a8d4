//! CLI command implementations.

pub mod activities;
pub mod auth;
pub mod config;
pub mod health;
pub mod photos;
pub mod stats;
pub mod wings;

use std::sync::Arc;

use anvaya_client::{AnvayaClient, ClientContext};
use anvaya_store::{open_token_store, Settings, SettingsStore};
use anyhow::Result;
use tracing::debug;

use crate::navigator::CliNavigator;
use crate::Cli;

/// Loads settings and builds a client acting at `location`.
pub async fn connect(cli: &Cli, location: &str) -> Result<(AnvayaClient, Settings)> {
    let settings = SettingsStore::load_default().await?.get().await;
    let client_settings = settings.client_settings(cli.api_url.as_deref());
    debug!(base_url = %client_settings.base_url, location, "Connecting");

    let ctx = ClientContext::builder()
        .settings(client_settings)
        .token_store(open_token_store(settings.token_storage))
        .navigator(Arc::new(CliNavigator::new(location, cli.quiet)))
        .build();

    Ok((AnvayaClient::new(ctx)?, settings))
}
