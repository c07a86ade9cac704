//! Blocking `Transport` backed by a ureq agent.

use tracing::trace;
use users_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Executes core requests over the network.
///
/// Status codes are never turned into errors here; only failures to complete
/// the exchange become `ApiError::Network`. No cookie store is attached, so
/// the only cookie sent is the one the core put on the request.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&mut self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = req;

        let result = match method {
            HttpMethod::Head => with_headers(self.agent.head(&path), &headers).call(),
            HttpMethod::Get => with_headers(self.agent.get(&path), &headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&path), &headers).call(),
            HttpMethod::Post => send(with_headers(self.agent.post(&path), &headers), body),
            HttpMethod::Put => send(with_headers(self.agent.put(&path), &headers), body),
        };
        let mut response = result.map_err(|e| ApiError::Network(format!("{} {path}: {e}", method.as_str())))?;

        let status = response.status().as_u16();
        let headers = header_pairs(response.headers());
        let body = if method == HttpMethod::Head {
            String::new()
        } else {
            response
                .body_mut()
                .read_to_string()
                .map_err(|e| ApiError::Network(format!("reading body of {path}: {e}")))?
        };
        trace!(status, bytes = body.len(), "exchange complete");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Every response header as text. Bytes that are not valid UTF-8 are replaced
/// rather than dropping the whole value.
fn header_pairs(headers: &ureq::http::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            (name.as_str().to_string(), value)
        })
        .collect()
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send(
    builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    body: Option<String>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

#[cfg(test)]
mod tests {
    use ureq::http::{header, HeaderMap, HeaderValue};
    use users_core::UsersClient;

    use super::*;

    #[test]
    fn header_pairs_keep_repeated_values_in_order() {
        let mut headers = HeaderMap::new();
        headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
        let pairs = header_pairs(&headers);
        assert_eq!(
            pairs,
            vec![
                ("set-cookie".to_string(), "a=1".to_string()),
                ("set-cookie".to_string(), "b=2".to_string()),
            ]
        );
    }

    #[test]
    fn non_ascii_set_cookie_still_opens_a_session() {
        let mut headers = HeaderMap::new();
        headers.append(header::SET_COOKIE, HeaderValue::from_bytes(b"name=Jos\xE9").unwrap());
        let response = HttpResponse {
            status: 200,
            headers: header_pairs(&headers),
            body: String::new(),
        };

        let session = UsersClient::new("http://mock").parse_session(&response).unwrap();
        assert!(session.cookie().starts_with("name=Jos"), "{}", session.cookie());
    }
}
