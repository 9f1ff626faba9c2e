//! Tests for the dispatch table and the file/page handlers.

use std::path::PathBuf;

use fileserve::config::StaticFilesConfig;
use fileserve::http::buffer::GrowableBuffer;
use fileserve::http::request::{Method, Request};
use fileserve::http::response::StatusCode;
use fileserve::routes::{Reply, dispatch};

const CHUNK_SIZE: usize = 1024;

fn temp_root(tag: &str) -> StaticFilesConfig {
    let root = std::env::temp_dir().join(format!("fileserve-routes-{}-{}", tag, std::process::id()));
    std::fs::create_dir_all(&root).unwrap();
    StaticFilesConfig { root }
}

fn get(path: &str) -> Request<'_> {
    Request {
        method: Method::GET,
        path,
        headers: vec![],
        body: None,
    }
}

fn post<'a>(path: &'a str, body: &str) -> Request<'a> {
    Request {
        method: Method::POST,
        path,
        headers: vec![],
        body: Some(GrowableBuffer::from_str(0, body)),
    }
}

fn expect_full(reply: Reply) -> fileserve::http::response::Response {
    match reply {
        Reply::Full(resp) => resp,
        Reply::FileStream { .. } => panic!("expected a buffered response"),
    }
}

#[tokio::test]
async fn test_index_serves_page_from_root() {
    let cfg = temp_root("index");
    std::fs::write(cfg.root.join("index.html"), "<h1>welcome</h1>").unwrap();

    let resp = expect_full(dispatch(&get("/"), &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.body, b"<h1>welcome</h1>".to_vec());
}

#[tokio::test]
async fn test_index_falls_back_when_page_missing() {
    let cfg = temp_root("index-fallback");

    let resp = expect_full(dispatch(&get("/"), &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.status, StatusCode::Ok);
    assert!(!resp.body.is_empty());
}

#[tokio::test]
async fn test_user_agent_reflects_header() {
    let cfg = temp_root("ua");
    let req = Request {
        method: Method::GET,
        path: "/user-agent",
        headers: vec![("User-Agent", "test-agent")],
        body: None,
    };

    let resp = expect_full(dispatch(&req, &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.headers.get("Content-Type").unwrap(), "text/plain");
    assert_eq!(resp.body, b"test-agent".to_vec());
}

#[tokio::test]
async fn test_user_agent_missing_yields_null_literal() {
    let cfg = temp_root("ua-null");

    let resp = expect_full(dispatch(&get("/user-agent"), &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.body, b"NULL".to_vec());
}

#[tokio::test]
async fn test_echo_returns_path_suffix_verbatim() {
    let cfg = temp_root("echo");

    let resp = expect_full(dispatch(&get("/echo/hello"), &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.headers.get("Content-Type").unwrap(), "text/plain");
    assert_eq!(resp.headers.get("Content-Length").unwrap(), "5");
    assert_eq!(resp.body, b"hello".to_vec());
}

#[tokio::test]
async fn test_echo_keeps_additional_slashes() {
    let cfg = temp_root("echo-slashes");

    let resp = expect_full(dispatch(&get("/echo/a/b//c"), &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.body, b"a/b//c".to_vec());
}

#[tokio::test]
async fn test_unknown_path_is_not_found_with_page() {
    let cfg = temp_root("notfound-page");
    std::fs::write(cfg.root.join("404.html"), "<h1>gone</h1>").unwrap();

    let resp = expect_full(dispatch(&get("/nope"), &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.status, StatusCode::NotFound);
    assert_eq!(resp.body, b"<h1>gone</h1>".to_vec());
}

#[tokio::test]
async fn test_download_missing_file_is_not_found() {
    let cfg = temp_root("dl-missing");

    let resp = expect_full(dispatch(&get("/files/missing.txt"), &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_download_existing_file_streams_with_exact_length() {
    let cfg = temp_root("dl-ok");
    std::fs::write(cfg.root.join("data.bin"), vec![b'z'; 3000]).unwrap();

    match dispatch(&get("/files/data.bin"), &cfg, CHUNK_SIZE).await {
        Reply::FileStream { head, length, .. } => {
            assert_eq!(head.status, StatusCode::Ok);
            assert_eq!(
                head.headers.get("Content-Type").unwrap(),
                "application/octet-stream"
            );
            assert_eq!(head.headers.get("Content-Length").unwrap(), "3000");
            assert_eq!(length, 3000);
        }
        Reply::Full(resp) => panic!("expected a file stream, got status {:?}", resp.status),
    }
}

#[tokio::test]
async fn test_upload_creates_file_and_conflicts_on_repeat() {
    let cfg = temp_root("upload");
    let target: PathBuf = cfg.root.join("a.txt");
    std::fs::remove_file(&target).ok();

    let first = expect_full(dispatch(&post("/files/a.txt", "hi"), &cfg, CHUNK_SIZE).await);
    assert_eq!(first.status, StatusCode::Created);
    assert_eq!(std::fs::read(&target).unwrap(), b"hi");

    let second = expect_full(dispatch(&post("/files/a.txt", "again"), &cfg, CHUNK_SIZE).await);
    assert_eq!(second.status, StatusCode::Conflict);
    // First upload untouched
    assert_eq!(std::fs::read(&target).unwrap(), b"hi");
}

#[tokio::test]
async fn test_upload_without_body_creates_empty_file() {
    let cfg = temp_root("upload-empty");
    let target = cfg.root.join("empty.txt");
    std::fs::remove_file(&target).ok();

    let req = Request {
        method: Method::POST,
        path: "/files/empty.txt",
        headers: vec![],
        body: None,
    };

    let resp = expect_full(dispatch(&req, &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.status, StatusCode::Created);
    assert_eq!(std::fs::read(&target).unwrap(), b"");
}

#[tokio::test]
async fn test_upload_body_larger_than_chunk_size() {
    let cfg = temp_root("upload-chunks");
    let target = cfg.root.join("big.txt");
    std::fs::remove_file(&target).ok();

    let payload = "x".repeat(2500);
    let resp = expect_full(dispatch(&post("/files/big.txt", &payload), &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.status, StatusCode::Created);
    assert_eq!(std::fs::read(&target).unwrap().len(), 2500);
}

#[tokio::test]
async fn test_files_route_other_methods_fall_through_to_not_found() {
    let cfg = temp_root("files-put");
    let req = Request {
        method: Method::PUT,
        path: "/files/a.txt",
        headers: vec![],
        body: None,
    };

    let resp = expect_full(dispatch(&req, &cfg, CHUNK_SIZE).await);

    assert_eq!(resp.status, StatusCode::NotFound);
}
