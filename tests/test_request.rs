use fileserve::http::buffer::GrowableBuffer;
use fileserve::http::request::{Method, Request};

#[test]
fn test_method_from_str_known_methods() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("PUT"), Some(Method::PUT));
    assert_eq!(Method::from_str("PATCH"), Some(Method::PATCH));
    assert_eq!(Method::from_str("DELETE"), Some(Method::DELETE));
}

#[test]
fn test_method_from_str_is_case_sensitive() {
    assert_eq!(Method::from_str("get"), None);
    assert_eq!(Method::from_str("Get"), None);
}

#[test]
fn test_method_from_str_rejects_unknown_tokens() {
    assert_eq!(Method::from_str("HEAD"), None);
    assert_eq!(Method::from_str("OPTIONS"), None);
    assert_eq!(Method::from_str(""), None);
    assert_eq!(Method::from_str("G E T"), None);
}

#[test]
fn test_header_lookup_case_insensitive() {
    let req = Request {
        method: Method::GET,
        path: "/",
        headers: vec![("User-Agent", "test-agent")],
        body: None,
    };

    assert_eq!(req.header("user-agent"), Some("test-agent"));
    assert_eq!(req.header("User-Agent"), Some("test-agent"));
    assert_eq!(req.header("USER-AGENT"), Some("test-agent"));
}

#[test]
fn test_header_lookup_missing_key() {
    let req = Request {
        method: Method::GET,
        path: "/",
        headers: vec![("Host", "localhost")],
        body: None,
    };

    assert_eq!(req.header("User-Agent"), None);
}

#[test]
fn test_header_lookup_first_of_duplicates() {
    let req = Request {
        method: Method::GET,
        path: "/",
        headers: vec![("Accept", "text/html"), ("Accept", "text/plain")],
        body: None,
    };

    assert_eq!(req.header("accept"), Some("text/html"));
}

#[test]
fn test_request_owns_its_body() {
    let req = Request {
        method: Method::POST,
        path: "/files/a.txt",
        headers: vec![],
        body: Some(GrowableBuffer::from_str(0, "hi")),
    };

    assert_eq!(req.body.unwrap().as_slice(), b"hi");
}
