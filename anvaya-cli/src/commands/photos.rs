//! Photos command - upload and delete wing photos.

use std::path::PathBuf;

use anvaya_client::UploadFile;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::info;

use super::connect;
use crate::navigator::ADMIN_LOCATION;
use crate::output::emit;
use crate::Cli;

/// Arguments for the photos command.
#[derive(Args)]
pub struct PhotosArgs {
    #[command(subcommand)]
    pub action: PhotosAction,
}

/// Photos subcommands.
#[derive(Subcommand)]
pub enum PhotosAction {
    /// Upload photos to a wing (admin).
    Upload {
        /// Target wing id.
        #[arg(long)]
        wing_id: i64,

        /// Image files.
        files: Vec<PathBuf>,
    },

    /// Delete a photo (admin).
    Delete {
        /// Photo id.
        id: i64,
    },
}

/// Runs the photos command.
pub async fn run(args: &PhotosArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        PhotosAction::Upload { wing_id, files } => {
            let mut uploads = Vec::with_capacity(files.len());
            for path in files {
                let file = UploadFile::from_path(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                uploads.push(file);
            }

            let (client, _) = connect(cli, ADMIN_LOCATION).await?;
            let photos = client.upload_photos(*wing_id, uploads).await?;
            info!(wing_id, count = photos.len(), "Photos uploaded");
            emit(cli, &photos, |f| {
                format!(
                    "{}\n{}",
                    f.format_success(&format!("Uploaded {} photo(s)", photos.len())),
                    f.format_photos(&photos)
                )
            })
        }
        PhotosAction::Delete { id } => {
            let (client, _) = connect(cli, ADMIN_LOCATION).await?;
            client.delete_photo(*id).await?;
            let result = serde_json::json!({ "deleted": "photo", "id": id });
            emit(cli, &result, |f| f.format_success(&format!("Deleted photo #{id}")))
        }
    }
}
