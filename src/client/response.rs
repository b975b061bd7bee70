//! Response-side types: the raw transport response and the per-request
//! metadata extracted from it.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// The raw outcome of a dispatched request.
///
/// Header names are lowercased by the transport so extraction is
/// case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct TransportResponse {
    /// The wire-format (XML) response body.
    pub body: String,
    /// Response headers, names lowercased.
    pub headers: HashMap<String, String>,
}

/// Diagnostic metadata returned alongside every decoded response.
///
/// Extracted from the `x-mws-*` response headers, with the request id
/// falling back to the `ResponseMetadata.RequestId` element of the body
/// when the header is absent. Quota numbers are only reported, never
/// enforced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RequestMeta {
    /// Server-assigned request identifier.
    pub request_id: Option<String>,
    /// Server timestamp of the response.
    pub timestamp: Option<String>,
    /// The hourly request quota ceiling for the calling account.
    pub quota_max: Option<f64>,
    /// Requests remaining in the current quota window.
    pub quota_remaining: Option<f64>,
    /// When the quota window resets.
    pub quota_reset_on: Option<String>,
}

impl RequestMeta {
    /// Extracts metadata from a response's headers and parsed body.
    pub(crate) fn from_response(headers: &HashMap<String, String>, body: &Value) -> Self {
        let text = |name: &str| headers.get(name).cloned();
        let quota = |name: &str| headers.get(name).and_then(|raw| raw.parse::<f64>().ok());

        let request_id = text("x-mws-request-id").or_else(|| body_request_id(body));
        if request_id.is_none() {
            tracing::warn!("response carried no request id in headers or body");
        }

        Self {
            request_id,
            timestamp: text("x-mws-timestamp"),
            quota_max: quota("x-mws-quota-max"),
            quota_remaining: quota("x-mws-quota-remaining"),
            quota_reset_on: text("x-mws-quota-resetson"),
        }
    }
}

/// Finds `ResponseMetadata.RequestId` at the document root or nested one
/// level under the response envelope element.
fn body_request_id(body: &Value) -> Option<String> {
    let root = body.as_object()?;
    root.get("ResponseMetadata")
        .and_then(metadata_request_id)
        .or_else(|| {
            root.values()
                .find_map(|child| child.get("ResponseMetadata").and_then(metadata_request_id))
        })
}

fn metadata_request_id(metadata: &Value) -> Option<String> {
    match metadata.get("RequestId")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn test_quota_headers_become_numbers() {
        let headers = headers(&[
            ("x-mws-quota-max", "1000"),
            ("x-mws-quota-remaining", "999"),
            ("x-mws-request-id", "0"),
        ]);
        let meta = RequestMeta::from_response(&headers, &json!({}));
        assert_eq!(meta.quota_max, Some(1000.0));
        assert_eq!(meta.quota_remaining, Some(999.0));
    }

    #[test]
    fn test_fractional_quota_values_parse() {
        let headers = headers(&[("x-mws-quota-max", "60.0"), ("x-mws-request-id", "0")]);
        let meta = RequestMeta::from_response(&headers, &json!({}));
        assert_eq!(meta.quota_max, Some(60.0));
    }

    #[test]
    fn test_request_id_prefers_header() {
        let headers = headers(&[("x-mws-request-id", "header-id")]);
        let body = json!({
            "ListOrdersResponse": {
                "ResponseMetadata": { "RequestId": "body-id" }
            }
        });
        let meta = RequestMeta::from_response(&headers, &body);
        assert_eq!(meta.request_id, Some("header-id".to_string()));
    }

    #[test]
    fn test_request_id_falls_back_to_body_metadata() {
        let body = json!({
            "ListOrdersResponse": {
                "ListOrdersResult": {},
                "ResponseMetadata": { "RequestId": "body-id" }
            }
        });
        let meta = RequestMeta::from_response(&HashMap::new(), &body);
        assert_eq!(meta.request_id, Some("body-id".to_string()));
    }

    #[test]
    fn test_missing_everything_yields_empty_meta() {
        let meta = RequestMeta::from_response(&HashMap::new(), &json!(""));
        assert_eq!(meta.request_id, None);
        assert_eq!(meta.timestamp, None);
        assert_eq!(meta.quota_max, None);
    }

    #[test]
    fn test_timestamp_and_reset_are_kept_as_text() {
        let headers = headers(&[
            ("x-mws-request-id", "0"),
            ("x-mws-timestamp", "2020-05-06T09:22:23.582Z"),
            ("x-mws-quota-resetson", "2020-04-06T10:22:23.582Z"),
        ]);
        let meta = RequestMeta::from_response(&headers, &json!({}));
        assert_eq!(meta.timestamp.as_deref(), Some("2020-05-06T09:22:23.582Z"));
        assert_eq!(
            meta.quota_reset_on.as_deref(),
            Some("2020-04-06T10:22:23.582Z")
        );
    }
}
