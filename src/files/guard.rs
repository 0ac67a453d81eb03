use std::path::PathBuf;

/// Outcome of joining a request path onto the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Full filesystem path, safe to probe.
    Resolved(String),
    /// The joined path contains `..`.
    Forbidden,
    /// No path, or a path that does not start with `/`.
    Malformed,
}

/// Joins request paths onto the root and rejects traversal attempts.
///
/// The join is plain string concatenation and the `..` check is textual:
/// symlinks and percent-encoded sequences are not resolved. Enabling
/// `strict` adds a canonical-path containment check on top.
#[derive(Debug, Clone)]
pub struct PathGuard {
    root: String,
    strict: bool,
}

impl PathGuard {
    pub fn new(root: impl Into<String>, strict: bool) -> Self {
        Self {
            root: root.into(),
            strict,
        }
    }

    /// Builds the full path without touching the filesystem.
    pub fn resolve(&self, request_path: Option<&str>) -> Resolution {
        let Some(path) = request_path else {
            return Resolution::Malformed;
        };

        let full = format!("{}{}", self.root, path);

        if contains_traversal(&full) {
            return Resolution::Forbidden;
        }
        if !path.starts_with('/') {
            return Resolution::Malformed;
        }

        Resolution::Resolved(full)
    }

    /// In strict mode, checks that `full_path` canonicalizes to somewhere
    /// under the canonical root. Paths that cannot be canonicalized (usually
    /// because they do not exist) pass; the existence check answers them.
    /// Always true when strict mode is off.
    pub async fn is_contained(&self, full_path: &str) -> bool {
        if !self.strict {
            return true;
        }

        let target = match tokio::fs::canonicalize(full_path).await {
            Ok(p) => p,
            Err(_) => return true,
        };
        let root: PathBuf = match tokio::fs::canonicalize(&self.root).await {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(root = %self.root, error = %e, "Cannot canonicalize document root");
                return false;
            }
        };

        target.starts_with(root)
    }
}

/// Textual parent-directory check.
pub fn contains_traversal(full_path: &str) -> bool {
    full_path.contains("..")
}
