use crate::http::buffer::GrowableBuffer;

/// HTTP request methods.
///
/// Represents the HTTP method/verb of a request. Only the methods in this
/// table are recognized; anything else aborts the connection at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// DELETE - Delete a resource
    DELETE,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, typically uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a known method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use fileserve::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "PATCH" => Some(Method::PATCH),
            "DELETE" => Some(Method::DELETE),
            _ => None,
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// The path and header fields are views into the connection's receive
/// buffer and live only as long as it does; the body, when present, is
/// copied into an owned buffer.
#[derive(Debug)]
pub struct Request<'a> {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path (e.g., "/files/notes.txt")
    pub path: &'a str,
    /// Headers in the order they appeared; duplicate keys are kept
    pub headers: Vec<(&'a str, &'a str)>,
    /// Request body, present only for a positive Content-Length
    pub body: Option<GrowableBuffer>,
}

impl Request<'_> {
    /// Retrieves a header value by name, case-insensitively.
    ///
    /// When the same key appears more than once, the first occurrence wins.
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| *v)
    }
}
