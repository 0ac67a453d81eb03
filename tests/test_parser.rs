use docserve::http::parser::{ParseError, parse_http_request, parse_partial_request};
use docserve::http::request::{Method, Request};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path.as_deref(), Some("/"));
    assert_eq!(parsed.version.as_deref(), Some("HTTP/1.1"));
    assert_eq!(consumed, 16);
}

#[test]
fn test_parse_ignores_headers_and_body() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.path.as_deref(), Some("/api"));
}

#[test]
fn test_parse_bare_newline_terminator() {
    let req = b"GET /notes.md HTTP/1.1\nHost: x\n\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path.as_deref(), Some("/notes.md"));
    assert_eq!(consumed, "GET /notes.md HTTP/1.1\n".len());
}

#[test]
fn test_parse_keeps_query_string_in_path() {
    let req = b"GET /search?q=rust HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path.as_deref(), Some("/search?q=rust"));
}

#[test]
fn test_parse_incomplete_request_line() {
    let result = parse_http_request(b"GET /index.ht");
    assert_eq!(result.unwrap_err(), ParseError::Incomplete);
}

#[test]
fn test_parse_empty_buffer() {
    assert_eq!(parse_http_request(b"").unwrap_err(), ParseError::Empty);
    assert_eq!(parse_partial_request(b"").unwrap_err(), ParseError::Empty);
}

#[test]
fn test_parse_partial_uses_whole_buffer() {
    let parsed = parse_partial_request(b"GET /docs").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path.as_deref(), Some("/docs"));
    assert_eq!(parsed.version, None);
}

#[test]
fn test_parse_missing_path() {
    let (parsed, _) = parse_http_request(b"GET\r\n").unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, None);
}

#[test]
fn test_parse_unknown_method_is_kept() {
    let (parsed, _) = parse_http_request(b"BREW /pot HTTP/1.1\r\n").unwrap();

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
    assert_eq!(parsed.method.as_str(), "BREW");
}

#[test]
fn test_parse_extra_whitespace_between_tokens() {
    let (parsed, _) = parse_http_request(b"GET    /a.txt\tHTTP/1.1 trailing\r\n").unwrap();

    assert_eq!(parsed.path.as_deref(), Some("/a.txt"));
    assert_eq!(parsed.version.as_deref(), Some("HTTP/1.1"));
}

#[test]
fn test_parse_invalid_utf8_does_not_fail() {
    let (parsed, _) = parse_http_request(b"GET /\xff\xfe.txt HTTP/1.1\r\n").unwrap();

    assert!(parsed.path.unwrap().starts_with('/'));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_request_get_helper() {
    let req = Request::get("/x");
    assert_eq!(req.path_display(), "/x");
    assert_eq!(Request::from_line("GET").path_display(), "-");
}
