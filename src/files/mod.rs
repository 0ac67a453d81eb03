//! Document-root resolution.
//!
//! Turns a parsed [`Request`](crate::http::request::Request) into exactly one
//! [`Response`](crate::http::response::Response): redirect lookup, traversal
//! guard, then a file, a rendered markdown page, or a directory listing.

pub mod dispatcher;
pub mod guard;
pub mod listing;
pub mod markdown;
pub mod redirect;

pub use dispatcher::Dispatcher;
pub use guard::{PathGuard, Resolution};
pub use listing::{DirEntry, read_entries, render_listing};
pub use markdown::{CommonMarkRenderer, MarkdownRenderer};
pub use redirect::RedirectTable;
