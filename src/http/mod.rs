//! HTTP protocol implementation.
//!
//! This module implements a minimal HTTP/1.1 server: one request per
//! connection, no keep-alive, no chunked transfer-encoding.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection handler implementing the request-response state machine
//! - **`parser`**: Parses one HTTP request from the receive buffer into borrowed views
//! - **`request`**: HTTP request representation and header lookup
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes responses and streams file bodies to the client
//! - **`buffer`**: Growable byte buffer used for bodies and serialization
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read into the fixed receive buffer,
//!        └──────┬──────┘   then parse and route in place
//!               │ Reply ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send exactly one response
//!        └──────┬───────────┘
//!               │ Response sent
//!               ▼
//!        ┌──────────────────┐
//!        │     Closed       │ ← Connection torn down
//!        └──────────────────┘
//! ```
//!
//! Parsing and routing happen inside the Reading transition because the
//! parsed request borrows the receive buffer and cannot outlive it.
//! Every failure path converges on the same teardown: the receive buffer,
//! body buffer, any open file handle, and the socket are all owned by the
//! connection task and released when it returns.

pub mod buffer;
pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
