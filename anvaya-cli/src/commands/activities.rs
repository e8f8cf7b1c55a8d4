//! Activities command - read and manage activities.

use std::path::{Path, PathBuf};

use anvaya_client::{ActivityUpdate, NewActivity, UploadFile};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use tracing::info;

use super::connect;
use crate::navigator::{ADMIN_LOCATION, PUBLIC_LOCATION};
use crate::output::emit;
use crate::Cli;

/// Arguments for the activities command.
#[derive(Args)]
pub struct ActivitiesArgs {
    #[command(subcommand)]
    pub action: ActivitiesAction,
}

/// Activities subcommands.
#[derive(Subcommand)]
pub enum ActivitiesAction {
    /// List activities across all wings.
    List {
        /// Maximum number of activities (server default 1000).
        #[arg(long)]
        limit: Option<u32>,
    },

    /// Show one activity.
    Show {
        /// Activity id.
        id: i64,
    },

    /// Create an activity (admin).
    Create {
        /// Owning wing id.
        #[arg(long)]
        wing_id: i64,

        /// Title.
        #[arg(long)]
        title: String,

        /// Description.
        #[arg(long)]
        description: String,

        /// Date, YYYY-MM-DD.
        #[arg(long)]
        date: NaiveDate,

        /// Faculty coordinator name.
        #[arg(long)]
        coordinator: Option<String>,

        /// PDF report to attach.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Update fields of an activity (admin).
    Update {
        /// Activity id.
        id: i64,

        /// New title.
        #[arg(long)]
        title: Option<String>,

        /// New description.
        #[arg(long)]
        description: Option<String>,

        /// New date, YYYY-MM-DD.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// New faculty coordinator name.
        #[arg(long)]
        coordinator: Option<String>,

        /// Replacement PDF report.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Delete an activity (admin).
    Delete {
        /// Activity id.
        id: i64,
    },
}

/// Runs the activities command.
pub async fn run(args: &ActivitiesArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ActivitiesAction::List { limit } => {
            let (client, _) = connect(cli, PUBLIC_LOCATION).await?;
            let activities = client.get_all_activities(*limit).await?;
            info!(count = activities.len(), "Fetched activities");
            emit(cli, &activities, |f| f.format_activities(&activities))
        }
        ActivitiesAction::Show { id } => {
            let (client, _) = connect(cli, PUBLIC_LOCATION).await?;
            let activity = client.get_activity(*id).await?;
            emit(cli, &activity, |f| f.format_activity(&activity))
        }
        ActivitiesAction::Create {
            wing_id,
            title,
            description,
            date,
            coordinator,
            report,
        } => {
            let mut activity = NewActivity::new(*wing_id, title.as_str(), description.as_str(), *date);
            activity.faculty_coordinator.clone_from(coordinator);
            if let Some(path) = report {
                activity.report_file = Some(read_upload(path).await?);
            }

            let (client, _) = connect(cli, ADMIN_LOCATION).await?;
            let created = client.create_activity(activity).await?;
            emit(cli, &created, |f| {
                format!(
                    "{}\n\n{}",
                    f.format_success(&format!("Created activity #{}", created.id)),
                    f.format_activity(&created)
                )
            })
        }
        ActivitiesAction::Update {
            id,
            title,
            description,
            date,
            coordinator,
            report,
        } => {
            let mut update = ActivityUpdate {
                title: title.clone(),
                description: description.clone(),
                activity_date: *date,
                faculty_coordinator: coordinator.clone(),
                report_file: None,
            };
            if let Some(path) = report {
                update.report_file = Some(read_upload(path).await?);
            }
            if update.is_empty() {
                anyhow::bail!("Nothing to update. Pass at least one of --title, --description, --date, --coordinator, --report");
            }

            let (client, _) = connect(cli, ADMIN_LOCATION).await?;
            let updated = client.update_activity(*id, update).await?;
            emit(cli, &updated, |f| {
                format!(
                    "{}\n\n{}",
                    f.format_success(&format!("Updated activity #{}", updated.id)),
                    f.format_activity(&updated)
                )
            })
        }
        ActivitiesAction::Delete { id } => {
            let (client, _) = connect(cli, ADMIN_LOCATION).await?;
            client.delete_activity(*id).await?;
            info!(id, "Activity deleted");
            let result = serde_json::json!({ "deleted": "activity", "id": id });
            emit(cli, &result, |f| f.format_success(&format!("Deleted activity #{id}")))
        }
    }
}

async fn read_upload(path: &Path) -> Result<UploadFile> {
    UploadFile::from_path(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}
