use std::sync::Arc;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::http::parser::{ParseError, parse_http_request};
use crate::http::reader::{MAX_REQUEST_SIZE, read_request};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// Drives a single accepted stream from read to close.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    router: Arc<Router>,
    state: ConnectionState,
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
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(MAX_REQUEST_SIZE),
            router,
            state: ConnectionState::Reading,
        }
    }

    /// Serves one request. Malformed requests and read errors are handled
    /// in place; a failed response write is returned once the stream has
    /// been shut down.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut outcome = Ok(());

        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await {
                        Ok(req) => ConnectionState::Processing(req),
                        Err(ParseError::Empty) => ConnectionState::Closed,
                        Err(e) => {
                            tracing::warn!(error = %e, "Rejecting malformed request");
                            let response = Response::empty(StatusCode::BadRequest);
                            ConnectionState::Writing(ResponseWriter::new(&response))
                        }
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.dispatch(req).await;
                    tracing::debug!(
                        status = response.status.as_u16(),
                        body_len = response.body.len(),
                        "Sending response"
                    );
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    outcome = writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("error sending response");
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "Error shutting down stream");
        }

        outcome
    }

    /// Reads and parses one request. A read error is logged and whatever was
    /// buffered before it is parsed anyway.
    pub async fn read_request(&mut self) -> Result<Request, ParseError> {
        if let Err(e) = read_request(&mut self.stream, &mut self.buffer).await {
            tracing::error!(error = %e, buffered = self.buffer.len(), "Error reading request");
        }

        let request = parse_http_request(&self.buffer)?;
        tracing::debug!(
            method = request.method.as_str(),
            path = %request.path,
            version = %request.version,
            "Parsed request"
        );
        Ok(request)
    }
}
