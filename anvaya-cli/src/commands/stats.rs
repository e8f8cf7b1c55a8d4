//! Stats command - per-wing activity counts.

use anyhow::Result;
use clap::Args;

use super::connect;
use crate::navigator::PUBLIC_LOCATION;
use crate::output::emit;
use crate::Cli;

/// Arguments for the stats command.
#[derive(Args, Default)]
pub struct StatsArgs {
    /// Restrict counts to one year.
    #[arg(long)]
    pub year: Option<i32>,
}

/// Runs the stats command.
pub async fn run(args: &StatsArgs, cli: &Cli) -> Result<()> {
    let (client, _) = connect(cli, PUBLIC_LOCATION).await?;
    let stats = client.get_activity_statistics(args.year).await?;
    emit(cli, &stats, |f| f.format_statistics(&stats))
}
