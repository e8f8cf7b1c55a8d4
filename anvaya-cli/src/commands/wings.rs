//! Wings command - browse wings and their content.

use anvaya_client::public::DEFAULT_PHOTO_LIMIT;
use anvaya_client::PhotoQuery;
use anyhow::Result;
use clap::{Args, Subcommand};
use tracing::info;

use super::connect;
use crate::navigator::PUBLIC_LOCATION;
use crate::output::emit;
use crate::Cli;

/// Arguments for the wings command.
#[derive(Args)]
pub struct WingsArgs {
    #[command(subcommand)]
    pub action: WingsAction,
}

/// Wings subcommands.
#[derive(Subcommand)]
pub enum WingsAction {
    /// List all wings.
    List,

    /// Show a wing with its activities and photos.
    Show {
        /// Wing slug.
        slug: String,
    },

    /// List a wing's photos.
    Photos {
        /// Wing slug.
        slug: String,

        /// Maximum number of photos.
        #[arg(long, default_value_t = DEFAULT_PHOTO_LIMIT)]
        limit: u32,

        /// Number of photos to skip.
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },

    /// List a wing's activities, newest first.
    Activities {
        /// Wing slug.
        slug: String,
    },
}

/// Runs the wings command.
pub async fn run(args: &WingsArgs, cli: &Cli) -> Result<()> {
    let (client, _) = connect(cli, PUBLIC_LOCATION).await?;

    match &args.action {
        WingsAction::List => {
            let wings = client.get_wings().await?;
            info!(count = wings.len(), "Fetched wings");
            emit(cli, &wings, |f| f.format_wings(&wings))
        }
        WingsAction::Show { slug } => {
            let wing = client.get_wing(slug).await?;
            emit(cli, &wing, |f| f.format_wing(&wing))
        }
        WingsAction::Photos { slug, limit, offset } => {
            let query = PhotoQuery {
                limit: *limit,
                offset: *offset,
            };
            let photos = client.get_wing_photos(slug, query).await?;
            emit(cli, &photos, |f| f.format_photos(&photos))
        }
        WingsAction::Activities { slug } => {
            let activities = client.get_wing_activities(slug).await?;
            emit(cli, &activities, |f| f.format_activities(&activities))
        }
    }
}
