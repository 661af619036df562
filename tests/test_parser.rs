use beacon::http::parser::{ParseError, find_headers_end, parse_http_request};
use beacon::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("Host").unwrap(), "localhost:4221");
}

#[test]
fn test_parse_multiple_headers() {
    let req = b"GET /user-agent HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client/1.0\r\nAccept: */*\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 3);
    assert_eq!(parsed.headers.get("User-Agent").unwrap(), "test-client/1.0");
    assert_eq!(parsed.headers.get("Accept").unwrap(), "*/*");
}

#[test]
fn test_parse_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.1\r\nX-Tag: one\r\nX-Tag: two\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("X-Tag"), Some("two"));
}

#[test]
fn test_parse_only_single_leading_space_trimmed() {
    let req = b"GET / HTTP/1.1\r\nA:  padded \r\nB:tight\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("A"), Some(" padded "));
    assert_eq!(parsed.header("B"), Some("tight"));
}

#[test]
fn test_parse_header_case_preservation() {
    let req = b"GET / HTTP/1.1\r\nuser-AGENT: x\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert!(parsed.headers.contains_key("user-AGENT"));
    assert!(!parsed.headers.contains_key("User-Agent"));
}

#[test]
fn test_parse_ignores_bytes_after_header_block() {
    let req = b"GET / HTTP/1.1\r\nHost: a\r\n\r\nNot-A-Header: b\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.len(), 1);
}

#[test]
fn test_parse_non_get_method() {
    let parsed = parse_http_request(b"POST /files/x HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::POST);
}

#[test]
fn test_parse_empty_buffer() {
    assert!(matches!(parse_http_request(b""), Err(ParseError::Empty)));
}

#[test]
fn test_parse_request_line_with_too_few_tokens() {
    let result = parse_http_request(b"GET /\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
}

#[test]
fn test_parse_request_line_with_too_many_tokens() {
    let result = parse_http_request(b"GET /a b HTTP/1.1\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
}

#[test]
fn test_parse_request_line_with_empty_path() {
    let result = parse_http_request(b"GET  HTTP/1.1\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidRequestLine(_))));
}

#[test]
fn test_parse_unlisted_method_is_kept() {
    let parsed = parse_http_request(b"TRACE / HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(parsed.method, Method::Extension("TRACE".to_string()));
}

#[test]
fn test_parse_lowercase_method_is_not_get() {
    let parsed = parse_http_request(b"get / HTTP/1.1\r\n\r\n").unwrap();

    assert_ne!(parsed.method, Method::GET);
    assert_eq!(parsed.method.as_str(), "get");
}

#[test]
fn test_parse_malformed_header() {
    let result = parse_http_request(b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n");

    assert!(matches!(result, Err(ParseError::InvalidHeader(_))));
}

#[test]
fn test_parse_invalid_utf8_is_tolerated() {
    let req = b"GET /echo/abc HTTP/1.1\r\nX-Bin: \xff\xfe\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/echo/abc");
    assert_eq!(parsed.header("X-Bin"), Some("\u{FFFD}\u{FFFD}"));
}

#[test]
fn test_find_headers_end() {
    assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n\r\n"), Some(14));
    assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n"), None);
}
