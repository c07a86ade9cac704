//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core crate builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network; whoever implements [`Transport`] owns the actual I/O. Keeping the
//! wire boundary this narrow lets tests swap in a recording transport and
//! assert on exactly what would have been sent.
//!
//! Header names are compared case-insensitively, values are kept verbatim.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Head,
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Head => "HEAD",
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `UsersClient::build_*` methods and handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First value of the named header, if any.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Repeated headers (e.g. several `set-cookie` lines) appear as separate
/// entries in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// All values of the named header, in the order the server sent them.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one request against the network (or a test double).
///
/// Implementations must return non-2xx responses as `Ok`; status
/// interpretation belongs to the core. `Err` is reserved for transport
/// failures and should be `ApiError::Network`.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(headers: &[(&str, &str)]) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: String::new(),
        }
    }

    #[test]
    fn header_values_keeps_order_and_ignores_case() {
        let resp = response(&[
            ("Set-Cookie", "a=1"),
            ("content-type", "text/plain"),
            ("set-cookie", "b=2"),
        ]);
        let values: Vec<&str> = resp.header_values("SET-COOKIE").collect();
        assert_eq!(values, vec!["a=1", "b=2"]);
    }

    #[test]
    fn header_values_empty_when_absent() {
        let resp = response(&[("content-type", "text/plain")]);
        assert_eq!(resp.header_values("set-cookie").count(), 0);
    }

    #[test]
    fn request_header_lookup_is_case_insensitive() {
        let req = HttpRequest {
            method: HttpMethod::Delete,
            path: "/api/users/3".to_string(),
            headers: vec![("cookie".to_string(), "a=1".to_string())],
            body: None,
        };
        assert_eq!(req.header("Cookie"), Some("a=1"));
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn success_range() {
        let mut resp = response(&[]);
        assert!(resp.is_success());
        resp.status = 204;
        assert!(resp.is_success());
        resp.status = 302;
        assert!(!resp.is_success());
        resp.status = 500;
        assert!(!resp.is_success());
    }

    #[test]
    fn method_names() {
        assert_eq!(HttpMethod::Head.as_str(), "HEAD");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
