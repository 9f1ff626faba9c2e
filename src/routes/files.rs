//! File download and upload under the configured root.
//!
//! The full path is built per request by joining the file name onto this
//! worker's own copy of the root, so concurrent requests never observe
//! each other's path construction.

use std::io::ErrorKind;
use std::path::Path;

use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::request::Request;
use crate::http::response::{ResponseBuilder, StatusCode};
use crate::routes::{Reply, pages};

/// `GET /files/<name>`: streams the file at `root + name`.
///
/// Missing file → 404 with the static 404 page; any other open or stat
/// failure → 400 with the static 400 page. On success the reply carries
/// the open handle and its exact byte size for the writer to stream.
pub async fn download(root: &Path, name: &str) -> Reply {
    let path = root.join(name);

    let file = match File::open(&path).await {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("File not found: {}", path.display());
            return pages::not_found(root).await;
        }
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", path.display(), e);
            return pages::bad_request(root).await;
        }
    };

    let length = match file.metadata().await {
        Ok(meta) => meta.len(),
        Err(e) => {
            tracing::warn!("Failed to stat {}: {}", path.display(), e);
            return pages::bad_request(root).await;
        }
    };

    let head = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "application/octet-stream")
        .header("Content-Length", length.to_string())
        .build();

    Reply::FileStream { head, file, length }
}

/// `POST /files/<name>`: writes the request body to a new file.
///
/// An existing file → 409 Conflict; any create or write failure → 400 with
/// the static 400 page. The body is written in `chunk_size` pieces plus one
/// final partial chunk. A write failure after creation removes the partial
/// file, so a retried POST does not 409 on data that was never stored.
pub async fn upload(root: &Path, name: &str, req: &Request<'_>, chunk_size: usize) -> Reply {
    let path = root.join(name);

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await
    {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!("Upload target already exists: {}", path.display());
            return Reply::Full(ResponseBuilder::new(StatusCode::Conflict).build());
        }
        Err(e) => {
            tracing::warn!("Failed to create {}: {}", path.display(), e);
            return pages::bad_request(root).await;
        }
    };

    let body = req.body.as_ref().map(|b| b.as_slice()).unwrap_or(&[]);

    match store_body(&mut file, body, chunk_size).await {
        Ok(()) => Reply::Full(ResponseBuilder::new(StatusCode::Created).build()),
        Err(e) => {
            tracing::warn!("Failed to write {}: {}", path.display(), e);
            drop(file);
            discard_partial(&path).await;
            pages::bad_request(root).await
        }
    }
}

/// Writes the body to `dst` in `chunk_size` pieces plus one final partial
/// chunk, then flushes.
async fn store_body(
    dst: &mut (impl AsyncWrite + Unpin),
    body: &[u8],
    chunk_size: usize,
) -> std::io::Result<()> {
    for chunk in body.chunks(chunk_size.max(1)) {
        dst.write_all(chunk).await?;
    }
    dst.flush().await
}

/// Removes whatever a failed upload left at `path`.
async fn discard_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!("Failed to remove partial file {}: {}", path.display(), e);
    }
}
