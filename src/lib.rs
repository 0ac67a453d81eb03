//! docserve - Static Document Server
//!
//! Core library: request-line parsing, response serialization and the
//! document-root dispatcher that serves files, directory listings and
//! rendered markdown.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
