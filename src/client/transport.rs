//! The transport capability and its default reqwest implementation.
//!
//! The dispatcher depends only on the [`Transport`] trait, so tests (and
//! embedders with their own HTTP stacks) can substitute a double
//! per-instance without touching global state.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::client::errors::{HttpError, HttpResponseError};
use crate::client::request::{HttpMethod, TransportRequest};
use crate::client::response::TransportResponse;

/// A capability that can dispatch one wire request and await its response.
///
/// Implementations must lowercase response header names and must not retry:
/// failure handling is the caller's concern.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Dispatches the request and returns the raw body and headers.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] when the call cannot complete and
    /// [`HttpError::Response`] for non-2xx responses.
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, HttpError>;
}

/// The default [`Transport`] backed by a reqwest client.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh reqwest client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, HttpError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;

        let code = response.status().as_u16();
        let headers = parse_response_headers(response.headers());
        let body = response.text().await.unwrap_or_default();

        if !(200..300).contains(&code) {
            return Err(HttpError::Response(HttpResponseError {
                code,
                body,
                request_id: headers.get("x-mws-request-id").cloned(),
            }));
        }

        Ok(TransportResponse { body, headers })
    }
}

/// Lowercases header names; the first value wins for repeated headers.
fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut result = HashMap::new();
    for (name, value) in headers {
        let name = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(name).or_insert(value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_is_object_safe() {
        fn assert_object_safe(_: &dyn Transport) {}
        let transport = ReqwestTransport::new();
        assert_object_safe(&transport);
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }
}
