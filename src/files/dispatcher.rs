use std::sync::Arc;

use crate::config::Config;
use crate::files::guard::{PathGuard, Resolution};
use crate::files::listing::{read_entries, render_listing};
use crate::files::markdown::{CommonMarkRenderer, MarkdownRenderer};
use crate::files::redirect::RedirectTable;
use crate::http::mime;
use crate::http::request::Request;
use crate::http::response::Response;

/// Per-request resolution state. Every step either produces the terminal
/// response or hands over to the next step; no step is revisited.
#[derive(Debug)]
enum Step {
    Redirect,
    Guard,
    Exists(String),
    Stat(String),
    ReadFile(String),
    ListDir(String),
    Done(Response),
}

/// Resolves requests against the document root and redirect table.
///
/// Shared read-only across all connection tasks.
pub struct Dispatcher {
    redirects: RedirectTable,
    guard: PathGuard,
    renderer: Arc<dyn MarkdownRenderer>,
}

impl Dispatcher {
    pub fn new(redirects: RedirectTable, guard: PathGuard) -> Self {
        Self {
            redirects,
            guard,
            renderer: Arc::new(CommonMarkRenderer),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        let redirects = RedirectTable::new(cfg.redirect_map.clone());
        tracing::debug!(
            root = %cfg.root_directory,
            redirects = redirects.len(),
            strict = cfg.strict_containment,
            "Dispatcher ready"
        );

        Self::new(
            redirects,
            PathGuard::new(cfg.root_directory.clone(), cfg.strict_containment),
        )
    }

    /// Swaps the markdown renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Produces the single response for `req`. Filesystem errors become
    /// 404 or 500 responses; nothing propagates.
    pub async fn dispatch(&self, req: &Request) -> Response {
        let mut step = Step::Redirect;

        loop {
            step = match step {
                Step::Redirect => self.check_redirect(req),
                Step::Guard => self.check_guard(req).await,
                Step::Exists(full) => check_exists(full).await,
                Step::Stat(full) => stat(full).await,
                Step::ReadFile(full) => self.read_file(&full).await,
                Step::ListDir(full) => list_dir(req, &full).await,
                Step::Done(response) => return response,
            };
        }
    }

    fn check_redirect(&self, req: &Request) -> Step {
        let target = req.path.as_deref().and_then(|p| self.redirects.lookup(p));

        match target {
            Some(location) => Step::Done(Response::redirect(location)),
            None => Step::Guard,
        }
    }

    async fn check_guard(&self, req: &Request) -> Step {
        match self.guard.resolve(req.path.as_deref()) {
            Resolution::Forbidden => Step::Done(Response::forbidden()),
            Resolution::Malformed => Step::Done(Response::not_found()),
            Resolution::Resolved(full) => {
                if self.guard.is_contained(&full).await {
                    Step::Exists(full)
                } else {
                    tracing::warn!(path = %full, "Path escapes document root");
                    Step::Done(Response::forbidden())
                }
            }
        }
    }

    async fn read_file(&self, full: &str) -> Step {
        let data = match tokio::fs::read(full).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %full, error = %e, "Failed to read file");
                return Step::Done(Response::internal_error());
            }
        };

        // Markdown has no table entry, so rendered pages fall back to the
        // writer's default content type.
        let content_type = mime::content_type_for_path(full);

        let body = if mime::extension(full).as_deref() == Some("md") {
            self.renderer
                .render(&String::from_utf8_lossy(&data))
                .into_bytes()
        } else {
            data
        };

        Step::Done(Response::ok(body, content_type))
    }
}

async fn check_exists(full: String) -> Step {
    match tokio::fs::try_exists(&full).await {
        Ok(true) => Step::Stat(full),
        _ => Step::Done(Response::not_found()),
    }
}

async fn stat(full: String) -> Step {
    match tokio::fs::metadata(&full).await {
        Ok(meta) if meta.is_file() => Step::ReadFile(full),
        Ok(_) => Step::ListDir(full),
        Err(e) => {
            tracing::warn!(path = %full, error = %e, "Failed to stat path");
            Step::Done(Response::internal_error())
        }
    }
}

async fn list_dir(req: &Request, full: &str) -> Step {
    match read_entries(full).await {
        Ok(entries) => {
            let page = render_listing(req.path_display(), &entries);
            Step::Done(Response::ok(page, Some("text/html")))
        }
        Err(e) => {
            tracing::warn!(path = %full, error = %e, "Failed to list directory");
            Step::Done(Response::internal_error())
        }
    }
}
