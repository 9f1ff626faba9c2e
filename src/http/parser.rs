use crate::http::buffer::GrowableBuffer;
use crate::http::request::{Method, Request};

#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    UnknownMethod,
    InvalidHeader,
    BodyLengthMismatch,
}

/// Parses one HTTP/1.1 request from the receive buffer.
///
/// Single left-to-right pass. Method, path, and header fields are borrowed
/// views into `buf`; the body (when a positive Content-Length is declared)
/// is copied into an owned buffer. At most `max_headers` headers are kept;
/// the rest are dropped without error.
pub fn parse_request(buf: &[u8], max_headers: usize) -> Result<Request<'_>, ParseError> {
    let mut cursor = Cursor::new(buf);

    // Request line
    let method_str = cursor.token_str(b' ')?;
    let method = Method::from_str(method_str).ok_or(ParseError::UnknownMethod)?;

    let path = cursor.token_str(b' ')?;

    // HTTP version, discarded
    cursor.token(b'\r');
    cursor.skip(b'\n');

    // Headers, until the blank line or the header cap
    let mut headers = Vec::new();
    while headers.len() < max_headers {
        let line = cursor.token_str(b'\r')?;
        cursor.skip(b'\n');

        if line.is_empty() {
            break;
        }

        let (key, rest) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        // The byte after the colon is assumed to be the separating space
        // and skipped unconditionally; lines without it mis-parse.
        let value = rest.get(1..).unwrap_or("");
        headers.push((key, value));
    }

    // Body
    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("Content-Length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let body = if content_length > 0 {
        let remaining = cursor.remaining();
        if remaining.len() < content_length {
            return Err(ParseError::BodyLengthMismatch);
        }
        let mut body = GrowableBuffer::with_capacity(content_length);
        body.append(&remaining[..content_length]);
        Some(body)
    } else {
        None
    };

    Ok(Request {
        method,
        path,
        headers,
        body,
    })
}

struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the bytes up to the next `delim` (or the rest of the buffer
    /// when absent) and advances past the delimiter.
    fn token(&mut self, delim: u8) -> &'a [u8] {
        let start = self.pos;
        while self.pos < self.buf.len() && self.buf[self.pos] != delim {
            self.pos += 1;
        }
        let token = &self.buf[start..self.pos];
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
        token
    }

    fn token_str(&mut self, delim: u8) -> Result<&'a str, ParseError> {
        std::str::from_utf8(self.token(delim)).map_err(|_| ParseError::InvalidRequest)
    }

    /// Consumes one byte if it equals `expected`.
    fn skip(&mut self, expected: u8) {
        if self.pos < self.buf.len() && self.buf[self.pos] == expected {
            self.pos += 1;
        }
    }

    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}
