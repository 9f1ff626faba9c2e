//! Static pages served from the root directory.
//!
//! The index, 404, and 400 pages are read from disk per response. When a
//! page file is itself missing, a built-in fallback body is used so the
//! one-response-per-request contract still holds.

use std::path::Path;

use crate::http::response::{ResponseBuilder, StatusCode};
use crate::routes::Reply;

const FALLBACK_INDEX: &[u8] = b"<html><body><h1>It works</h1></body></html>";
const FALLBACK_NOT_FOUND: &[u8] = b"404 Not Found";
const FALLBACK_BAD_REQUEST: &[u8] = b"400 Bad Request";

async fn load(root: &Path, name: &str, fallback: &[u8]) -> Vec<u8> {
    match tokio::fs::read(root.join(name)).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("Static page {} unavailable ({}), using fallback", name, e);
            fallback.to_vec()
        }
    }
}

pub async fn index(root: &Path) -> Reply {
    let body = load(root, "index.html", FALLBACK_INDEX).await;
    Reply::Full(
        ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/html")
            .body(body)
            .build(),
    )
}

pub async fn not_found(root: &Path) -> Reply {
    let body = load(root, "404.html", FALLBACK_NOT_FOUND).await;
    Reply::Full(
        ResponseBuilder::new(StatusCode::NotFound)
            .header("Content-Type", "text/html")
            .body(body)
            .build(),
    )
}

pub async fn bad_request(root: &Path) -> Reply {
    let body = load(root, "400.html", FALLBACK_BAD_REQUEST).await;
    Reply::Full(
        ResponseBuilder::new(StatusCode::BadRequest)
            .header("Content-Type", "text/html")
            .body(body)
            .build(),
    )
}
