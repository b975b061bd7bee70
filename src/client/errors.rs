//! HTTP-specific error types for the MWS SDK.
//!
//! Transport failures propagate un-retried: the core performs no retry or
//! backoff, so a single failed attempt is a single reported failure.

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// The raw body is carried verbatim (MWS error bodies are XML documents)
/// along with the request id for support escalation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("MWS request failed with status {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The `x-mws-request-id` header, if present.
    pub request_id: Option<String>,
}

/// Unified error type for transport-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response from the service.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_message_carries_status_and_body() {
        let error = HttpResponseError {
            code: 403,
            body: "<ErrorResponse><Error><Code>SignatureDoesNotMatch</Code></Error></ErrorResponse>"
                .to_string(),
            request_id: Some("abc-123".to_string()),
        };
        let message = error.to_string();
        assert!(message.contains("403"));
        assert!(message.contains("SignatureDoesNotMatch"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &HttpResponseError {
            code: 500,
            body: String::new(),
            request_id: None,
        };
        let _ = error;
    }
}
