//! Cookie Forwarding
//!
//! The auth provider owns cookie issuance and parsing; this backend only
//! forwards the raw Cookie header on session lookups.

use axum::http::{HeaderMap, header};

/// The raw Cookie header, forwarded verbatim to the auth provider
pub fn forwarded_cookie_header(headers: &HeaderMap) -> String {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_forwarded_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session=abc123; theme=dark"),
        );
        assert_eq!(forwarded_cookie_header(&headers), "session=abc123; theme=dark");

        let empty = HeaderMap::new();
        assert_eq!(forwarded_cookie_header(&empty), "");
    }

    #[test]
    fn test_non_utf8_cookie_header_forwarded_as_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_bytes(b"session=\xff").unwrap(),
        );
        assert_eq!(forwarded_cookie_header(&headers), "");
    }
}
