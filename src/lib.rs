//! Fileserve - Minimal HTTP/1.1 File Server
//!
//! One connection, one request, one response: read, parse, route, write, close.

pub mod config;
pub mod http;
pub mod routes;
pub mod server;
