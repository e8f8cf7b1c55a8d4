//! Health command - check that the backend is reachable.

use anyhow::Result;
use tracing::warn;

use super::connect;
use crate::navigator::PUBLIC_LOCATION;
use crate::output::emit;
use crate::Cli;

/// Runs the health command.
pub async fn run(cli: &Cli) -> Result<()> {
    let (client, _) = connect(cli, PUBLIC_LOCATION).await?;
    let base_url = client.http().base_url().as_str().trim_end_matches('/').to_string();

    let health = client.health().await?;
    let info = match client.api_info().await {
        Ok(info) => Some(info),
        Err(e) => {
            warn!(error = %e, "Service info unavailable");
            None
        }
    };

    let result = serde_json::json!({
        "apiBaseUrl": base_url,
        "health": health,
        "info": info,
    });
    emit(cli, &result, |f| f.format_health(&base_url, &health, info.as_ref()))?;

    if !health.is_healthy() {
        anyhow::bail!("Backend reports status '{}'", health.status);
    }
    Ok(())
}
