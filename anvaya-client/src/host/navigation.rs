//! Navigation collaborator.
//!
//! When the server rejects a request with 401 the transport asks the
//! navigator where the user currently is and, for protected locations,
//! sends them to the login page. The navigator owns what "redirect" means.

use tracing::trace;

/// Receives redirect requests from the transport.
pub trait Navigator: Send + Sync {
    /// Path of the current location, e.g. `/admin/activities`.
    fn current_path(&self) -> String;

    /// Navigates to `path`.
    fn redirect(&self, path: &str);
}

/// Navigator for contexts without navigation. Sits at `/` and ignores redirects.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn current_path(&self) -> String {
        "/".to_string()
    }

    fn redirect(&self, path: &str) {
        trace!(path = %path, "Redirect ignored");
    }
}

/// Returns true if `path` is `prefix` itself or lies below it.
pub fn is_under_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
