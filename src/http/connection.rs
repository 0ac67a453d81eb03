use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio::net::TcpStream;

use crate::files::Dispatcher;
use crate::http::parser::{MAX_REQUEST_LINE, ParseError, parse_http_request, parse_partial_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

pub struct Connection<S = TcpStream> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    dispatcher: Arc<Dispatcher>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(1024),
            state: ConnectionState::Reading,
            dispatcher,
        }
    }

    /// Drives the connection to completion: one request, one response,
    /// then close.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    None => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = self.dispatcher.dispatch(req).await;

                    tracing::info!(
                        method = req.method.as_str(),
                        path = req.path_display(),
                        status = response.status.as_u16(),
                        "Request served"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(response));
                }

                ConnectionState::Writing(writer) => {
                    // Close regardless of the outcome so a failed write is
                    // never followed by another response.
                    let res = writer.write_to_stream(&mut self.stream).await;
                    self.state = ConnectionState::Closed;
                    res?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Buffers bytes until the request line is complete, the peer closes,
    /// or the line exceeds [`MAX_REQUEST_LINE`].
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            match parse_http_request(&self.buffer) {
                Ok((request, _consumed)) => return Ok(Some(request)),
                Err(ParseError::Incomplete) | Err(ParseError::Empty) => {}
            }

            if self.buffer.len() >= MAX_REQUEST_LINE {
                return Ok(parse_partial_request(&self.buffer).ok());
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Peer closed; use whatever arrived.
                return Ok(parse_partial_request(&self.buffer).ok());
            }
        }
    }
}
