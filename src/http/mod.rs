//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 surface: only the request line is read, and
//! every connection carries exactly one response before it is closed.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine driving read, dispatch and write
//! - **`parser`**: Extracts the request line from the inbound byte buffer
//! - **`request`**: Request representation (method, path, version)
//! - **`response`**: Response representation with in-order headers
//! - **`writer`**: Serializes and writes a response to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Buffer until the request line is complete
//!        └──────┬──────┘
//!               │ Request line received
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatcher resolves the path
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent (or write failed)
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │
//!        └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use docserve::config::Config;
//! use docserve::files::Dispatcher;
//! use docserve::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::from_file("config.json")?;
//!     let dispatcher = Arc::new(Dispatcher::from_config(&cfg));
//!     let listener = TcpListener::bind("127.0.0.1:3000").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let dispatcher = dispatcher.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, dispatcher);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
