use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::buffer::GrowableBuffer;
use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_response(resp: &Response) -> GrowableBuffer {
    let mut buf = GrowableBuffer::with_capacity(128);

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.append(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        buf.append(k.as_bytes());
        buf.append(b": ");
        buf.append(v.as_bytes());
        buf.append(b"\r\n");
    }

    // Header/body separator
    buf.append(b"\r\n");

    // Body
    buf.append(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: GrowableBuffer,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer.as_slice()[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}

/// Copies `length` bytes from `file` to the client in `chunk_size` reads.
///
/// The response head must already have been written with a matching
/// Content-Length. A short read before `length` is exhausted is an error:
/// the framing promised to the client can no longer be met.
pub async fn stream_file(
    stream: &mut TcpStream,
    file: &mut File,
    length: u64,
    chunk_size: usize,
) -> anyhow::Result<()> {
    let mut chunk = vec![0u8; chunk_size];
    let mut remaining = length;

    while remaining > 0 {
        let want = chunk_size.min(remaining as usize);
        let n = file
            .read(&mut chunk[..want])
            .await
            .context("file read failed mid-stream")?;

        if n == 0 {
            return Err(anyhow::anyhow!("file truncated while streaming"));
        }

        stream
            .write_all(&chunk[..n])
            .await
            .context("send failed mid-stream")?;

        remaining -= n as u64;
    }

    Ok(())
}
