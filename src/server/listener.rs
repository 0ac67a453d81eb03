use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::files::Dispatcher;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);

    serve(listener, cfg).await
}

/// Accepts connections forever, one task per connection.
///
/// With `max_connections` set, accepting pauses while that many connections
/// are in flight.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let dispatcher = Arc::new(Dispatcher::from_config(cfg));
    let limit = cfg.max_connections.map(|n| Arc::new(Semaphore::new(n)));

    loop {
        let permit = match &limit {
            Some(sem) => Some(sem.clone().acquire_owned().await?),
            None => None,
        };

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!("Accept failed: {}", e);
                continue;
            }
        };
        tracing::debug!("Accepted connection from {}", peer);

        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
            let _permit = permit;
            let mut conn = Connection::new(socket, dispatcher);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
