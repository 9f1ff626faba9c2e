use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::config::{LimitsConfig, StaticFilesConfig};
use crate::http::parser::parse_request;
use crate::http::writer::{self, ResponseWriter};
use crate::routes::{self, Reply, pages};

pub struct Connection {
    stream: TcpStream,
    static_files: StaticFilesConfig,
    limits: LimitsConfig,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Writing(Reply),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, static_files: StaticFilesConfig, limits: LimitsConfig) -> Self {
        Self {
            stream,
            static_files,
            limits,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to completion: one request, one response.
    ///
    /// All resources this connection holds (receive buffer, body buffer,
    /// open file handle, socket) are owned by `self` or by the current
    /// state, so every exit path, including errors, releases them.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_and_route().await? {
                        Some(reply) => {
                            self.state = ConnectionState::Writing(reply);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Writing(reply) => {
                    match reply {
                        Reply::Full(response) => {
                            let mut w = ResponseWriter::new(response);
                            w.write_to_stream(&mut self.stream).await?;
                        }
                        Reply::FileStream { head, file, length } => {
                            let mut w = ResponseWriter::new(head);
                            w.write_to_stream(&mut self.stream).await?;
                            writer::stream_file(
                                &mut self.stream,
                                file,
                                *length,
                                self.limits.buffer_size,
                            )
                            .await?;
                        }
                    }
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Performs the single read, parses in place, and routes.
    ///
    /// Returns `None` when the peer closed without sending anything. Parse
    /// failures are not silent: they turn into a 400 reply so the client
    /// always sees exactly one response for whatever it sent.
    async fn read_and_route(&mut self) -> anyhow::Result<Option<Reply>> {
        let mut buf = BytesMut::with_capacity(self.limits.buffer_size);

        let n = self
            .stream
            .read_buf(&mut buf)
            .await
            .map_err(|e| anyhow::anyhow!("recv failed: {}", e))?;

        if n == 0 {
            return Ok(None);
        }

        let reply = match parse_request(&buf[..n], self.limits.max_headers) {
            Ok(request) => {
                tracing::debug!(method = ?request.method, path = %request.path, "Dispatching request");
                routes::dispatch(&request, &self.static_files, self.limits.buffer_size).await
            }
            Err(e) => {
                tracing::warn!("Request parse error: {:?}", e);
                pages::bad_request(&self.static_files.root).await
            }
        };

        Ok(Some(reply))
    }
}
