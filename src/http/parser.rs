use std::collections::HashMap;

use thiserror::Error;

use crate::http::request::{Method, Request};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty request")]
    Empty,
    #[error("malformed request line: {0:?}")]
    InvalidRequestLine(String),
    #[error("malformed header line: {0:?}")]
    InvalidHeader(String),
}

/// Parses the request line and header block out of `buf`.
///
/// `buf` holds exactly the bytes read from the peer. If the blank line that
/// ends the header block is missing (the request was truncated), the
/// unterminated trailing fragment is dropped instead of being read as a header.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let text = String::from_utf8_lossy(buf);
    let head = match text.find("\r\n\r\n") {
        Some(end) => &text[..end],
        None => match text.rfind("\r\n") {
            Some(last) => &text[..last],
            None => &text[..],
        },
    };

    let mut lines = head.split("\r\n");

    // Request line
    let request_line = lines.next().unwrap_or_default();
    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method_str, path, version] = parts.as_slice() else {
        return Err(ParseError::InvalidRequestLine(request_line.to_string()));
    };
    if method_str.is_empty() || path.is_empty() {
        return Err(ParseError::InvalidRequestLine(request_line.to_string()));
    }

    let method = Method::from(*method_str);

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            break;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))?;

        let value = value.strip_prefix(' ').unwrap_or(value);
        headers.insert(key.to_string(), value.to_string());
    }

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
    })
}

/// Offset of the `\r\n\r\n` that terminates the header block, if present.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.method, Method::GET);
        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.headers.get("Host").unwrap(), "localhost:4221");
    }

    #[test]
    fn truncated_fragment_is_not_a_header() {
        let req = b"GET / HTTP/1.1\r\nHost: a\r\nUser-Ag";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.headers.len(), 1);
        assert_eq!(parsed.header("Host"), Some("a"));
    }

    #[test]
    fn bare_request_line_without_crlf() {
        let parsed = parse_http_request(b"GET /echo/x HTTP/1.1").unwrap();
        assert_eq!(parsed.path, "/echo/x");
        assert!(parsed.headers.is_empty());
    }
}
