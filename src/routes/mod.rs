//! Built-in route handlers
//!
//! This module implements the dispatch table and the behaviors behind it:
//! static index page, echo, user-agent reflection, and per-file GET/POST
//! under the configured root directory.

pub mod files;
pub mod pages;

use tokio::fs::File;

use crate::config::StaticFilesConfig;
use crate::http::request::{Method, Request};
use crate::http::response::Response;

/// What a route handler produced for the connection to write.
///
/// Every request yields exactly one `Reply`; handlers never write to the
/// socket themselves, so a single response per request is guaranteed by
/// construction.
pub enum Reply {
    /// A fully buffered response.
    Full(Response),
    /// A response head followed by `length` bytes streamed from `file`.
    FileStream {
        head: Response,
        file: File,
        length: u64,
    },
}

/// Routes a parsed request to its handler. Ordered match, first pattern wins.
pub async fn dispatch(
    req: &Request<'_>,
    static_files: &StaticFilesConfig,
    chunk_size: usize,
) -> Reply {
    let root = &static_files.root;

    if req.path == "/" {
        return pages::index(root).await;
    }

    if req.path == "/user-agent" {
        let agent = req.header("User-Agent").unwrap_or("NULL");
        return Reply::Full(Response::plain_text(agent.as_bytes().to_vec()));
    }

    if let Some(rest) = req.path.strip_prefix("/echo/") {
        // Echoed verbatim, further slashes included.
        return Reply::Full(Response::plain_text(rest.as_bytes().to_vec()));
    }

    if let Some(name) = req.path.strip_prefix("/files/") {
        match req.method {
            Method::GET => return files::download(root, name).await,
            Method::POST => return files::upload(root, name, req, chunk_size).await,
            _ => {}
        }
    }

    pages::not_found(root).await
}
