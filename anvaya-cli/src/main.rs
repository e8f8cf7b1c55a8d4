// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! Anvaya CLI - browse and manage Anvaya Club wings from the command line.
//!
//! # Examples
//!
//! ```bash
//! # List wings
//! anvaya wings list
//!
//! # A wing's photos, second page
//! anvaya wings photos codezero --limit 20 --offset 20
//!
//! # Statistics for one year, as JSON
//! anvaya stats --year 2024 --format json --pretty
//!
//! # Admin session
//! anvaya login --username admin
//! anvaya activities create --wing-id 1 --title "Hack Night" \
//!     --description "Overnight coding" --date 2024-03-15 --report report.pdf
//! anvaya photos upload --wing-id 1 stage.jpg crowd.jpg
//! anvaya logout
//! ```

mod commands;
mod navigator;
mod output;

use anvaya_client::{ApiError, ClientError};
use anvaya_store::StoreError;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{activities, auth, config, health, photos, stats, wings};
use output::{ErrorOutput, JsonFormatter, TextFormatter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Anvaya CLI - Anvaya Club API client.
#[derive(Parser)]
#[command(name = "anvaya")]
#[command(about = "Command-line client for the Anvaya Club API")]
#[command(long_about = r#"
Browse wings, activities, photos and statistics, and manage them as an admin.

The API base URL is taken from --api-url, then ANVAYA_API_URL, then the
settings file (`anvaya config set-url`), then http://localhost:8000.

Examples:
  anvaya wings list                 # All wings
  anvaya wings show codezero        # One wing with activities and photos
  anvaya stats --year 2024          # Activity counts per wing
  anvaya login --username admin     # Start an admin session
  anvaya --format json wings list   # JSON output
"#)]
#[command(version)]
#[command(author = "Anvaya Club")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides ANVAYA_API_URL and the settings file).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse wings.
    #[command(visible_alias = "w")]
    Wings(wings::WingsArgs),

    /// Browse and manage activities.
    #[command(visible_alias = "a")]
    Activities(activities::ActivitiesArgs),

    /// Upload and delete photos.
    #[command(visible_alias = "p")]
    Photos(photos::PhotosArgs),

    /// Show activity statistics.
    #[command(visible_alias = "s")]
    Stats(stats::StatsArgs),

    /// Log in as admin and store the session token.
    Login(auth::LoginArgs),

    /// Forget the stored session token.
    Logout,

    /// Show the API URL and session state.
    Whoami,

    /// Check backend health.
    Health,

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success.
    Success = 0,
    /// General error.
    Error = 1,
    /// Not logged in, session rejected or not permitted.
    AuthRequired = 2,
    /// Resource not found.
    NotFound = 3,
    /// Input rejected locally or by the server.
    Validation = 4,
    /// No response from the server.
    Network = 5,
}

impl ExitCode {
    /// Maps a command failure to its exit code.
    pub fn for_error(err: &anyhow::Error) -> Self {
        if let Some(client_err) = err.downcast_ref::<ClientError>() {
            return match client_err {
                ClientError::Api(api) => Self::for_api(api),
                ClientError::Validation(_) => Self::Validation,
                ClientError::Storage(_) | ClientError::Config(_) => Self::Error,
            };
        }
        if let Some(api) = err.downcast_ref::<ApiError>() {
            return Self::for_api(api);
        }
        if let Some(StoreError::InvalidValue { .. }) = err.downcast_ref::<StoreError>() {
            return Self::Validation;
        }
        Self::Error
    }

    fn for_api(err: &ApiError) -> Self {
        if err.is_network_error() {
            Self::Network
        } else if err.is_auth_error() || err.is_forbidden() {
            Self::AuthRequired
        } else if err.is_not_found() {
            Self::NotFound
        } else if err.status() == 400 || err.status() == 422 {
            Self::Validation
        } else {
            Self::Error
        }
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("anvaya=debug,info")
    } else {
        EnvFilter::new("anvaya=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Error Reporting
// ============================================================================

fn report_error(err: &anyhow::Error, cli: &Cli) {
    match cli.format {
        OutputFormat::Text => {
            if !cli.quiet {
                eprintln!("{}", TextFormatter::new(!cli.no_color).format_error(&format!("{err:#}")));
            }
        }
        OutputFormat::Json => {
            let api = err
                .downcast_ref::<ClientError>()
                .and_then(ClientError::as_api)
                .or_else(|| err.downcast_ref::<ApiError>());
            let output = ErrorOutput {
                error: format!("{err:#}"),
                status: api.map(ApiError::status).filter(|s| *s != 0),
                network_error: api.is_some_and(ApiError::is_network_error),
                error_code: api.and_then(ApiError::error_code).map(str::to_string),
            };
            println!("{}", JsonFormatter::new(cli.pretty).format_error(&output));
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Wings(args) => wings::run(args, &cli).await,
        Commands::Activities(args) => activities::run(args, &cli).await,
        Commands::Photos(args) => photos::run(args, &cli).await,
        Commands::Stats(args) => stats::run(args, &cli).await,
        Commands::Login(args) => auth::login(args, &cli).await,
        Commands::Logout => auth::logout(&cli).await,
        Commands::Whoami => auth::whoami(&cli).await,
        Commands::Health => health::run(&cli).await,
        Commands::Config(args) => config::run(args, &cli).await,
    };

    if let Err(e) = result {
        report_error(&e, &cli);
        std::process::exit(ExitCode::for_error(&e) as i32);
    }

    Ok(())
}
