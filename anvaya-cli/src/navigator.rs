//! Terminal navigation collaborator.
//!
//! A command has no page, so each one declares the location it acts on:
//! public reads sit at `/`, admin writes under `/admin`. A redirect to the
//! login page becomes a hint on stderr.

use anvaya_client::Navigator;
use tracing::debug;

/// Location of commands that only read public data.
pub const PUBLIC_LOCATION: &str = "/";

/// Location of commands that change data.
pub const ADMIN_LOCATION: &str = "/admin";

/// Location of the login command.
pub const LOGIN_LOCATION: &str = "/admin/login";

/// Navigator for a single CLI invocation.
#[derive(Debug, Clone)]
pub struct CliNavigator {
    location: String,
    quiet: bool,
}

impl CliNavigator {
    /// Creates a navigator sitting at `location`.
    pub fn new(location: &str, quiet: bool) -> Self {
        Self {
            location: location.to_string(),
            quiet,
        }
    }

    /// Message shown when the session is sent back to login.
    pub fn login_hint() -> &'static str {
        "Your session has expired or is invalid. Run `anvaya login` to sign in again."
    }
}

impl Navigator for CliNavigator {
    fn current_path(&self) -> String {
        self.location.clone()
    }

    fn redirect(&self, path: &str) {
        if path == self.location {
            debug!(path = %path, "Already at redirect target");
            return;
        }
        if !self.quiet {
            eprintln!("{}", Self::login_hint());
        }
    }
}
