//! Request envelope construction and dispatch.
//!
//! [`HttpClient`] composes the canonicalizer and signer into a fully
//! authenticated request for a given resource/action/parameter set,
//! dispatches it via an injected [`Transport`], parses the XML body into an
//! untyped tree and extracts [`RequestMeta`] from the response headers. The
//! untyped tree is handed back to the calling section module, which applies
//! its own decoder.
//!
//! Each call is a straight-line asynchronous sequence: build envelope,
//! await transport, parse, return. No retries, no shared mutable state; the
//! only shared read-only state is the [`MwsConfig`] captured at
//! construction.

mod errors;
mod request;
mod response;
pub mod sign;
mod transport;
mod xml;

pub use errors::{HttpError, HttpResponseError};
pub use request::{HttpMethod, ParameterValue, Parameters, Resource, TransportRequest};
pub use response::{RequestMeta, TransportResponse};
pub use transport::{ReqwestTransport, Transport};

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::config::MwsConfig;
use crate::error::MwsError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making signed requests against the MWS endpoints.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`; concurrent invocations are safe by
/// construction because every value built per call is immutable and
/// call-local.
///
/// # Example
///
/// ```rust,ignore
/// use mws_sdk::{HttpClient, Mws, MwsConfig};
///
/// let client = HttpClient::new(config);
/// let mws = Mws::new(client);
/// let (status, meta) = mws.orders().get_service_status().await?;
/// ```
pub struct HttpClient {
    config: MwsConfig,
    transport: Arc<dyn Transport>,
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a client that dispatches through the default reqwest
    /// transport.
    #[must_use]
    pub fn new(config: MwsConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client with an injected transport, e.g. a test double.
    #[must_use]
    pub fn with_transport(config: MwsConfig, transport: Arc<dyn Transport>) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("mws-sdk/{SDK_VERSION} (Language=Rust/{rust_version})");
        Self {
            config,
            transport,
            user_agent,
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &MwsConfig {
        &self.config
    }

    /// Builds the fully signed wire request for the given call.
    ///
    /// Merges the caller's parameters with the fixed protocol parameters,
    /// canonicalizes them without the signature, signs, appends the
    /// `Signature` parameter and serializes once more: into the URL query
    /// string for GET, into the form-encoded body for POST.
    ///
    /// Pure given a fixed `timestamp`, which makes envelope construction
    /// directly testable.
    #[must_use]
    pub fn build_request(
        &self,
        method: HttpMethod,
        resource: Resource,
        version: &str,
        action: &str,
        parameters: &Parameters,
        timestamp: &str,
    ) -> TransportRequest {
        let mut merged = Parameters::new();
        merged.insert("AWSAccessKeyId", self.config.access_key_id().as_ref());
        merged.insert("Action", action);
        merged.insert("MWSAuthToken", self.config.auth_token().as_ref());
        merged.insert("SellerId", self.config.seller_id().as_ref());
        merged.insert("SignatureMethod", "HmacSHA256");
        merged.insert("SignatureVersion", "2");
        merged.insert("Timestamp", timestamp);
        merged.insert("Version", version);
        merged.merge(parameters);

        let host = self.config.endpoint().host();
        let path = format!("/{}/{version}", resource.as_str());

        // The signature is computed over the canonical form of every
        // parameter except itself, then appended.
        let unsigned_query = sign::canonicalize(&merged);
        let string_to_sign = sign::string_to_sign(method, host, &path, &unsigned_query);
        let signature = sign::sign(&string_to_sign, self.config.secret_key());
        merged.insert("Signature", signature);
        let signed_query = sign::canonicalize(&merged);

        let base_url = format!("{}{path}", self.config.endpoint().uri());
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), self.user_agent.clone());

        match method {
            HttpMethod::Get => TransportRequest {
                method,
                url: format!("{base_url}?{signed_query}"),
                headers,
                body: None,
            },
            HttpMethod::Post => {
                headers.insert(
                    "Content-Type".to_string(),
                    "application/x-www-form-urlencoded".to_string(),
                );
                TransportRequest {
                    method,
                    url: base_url,
                    headers,
                    body: Some(signed_query),
                }
            }
        }
    }

    /// Dispatches a signed request and returns the untyped response
    /// document with its metadata.
    ///
    /// # Errors
    ///
    /// Transport failures propagate as [`MwsError::Http`]; an
    /// ill-formed XML body is an [`MwsError::Parsing`].
    pub async fn request(
        &self,
        method: HttpMethod,
        resource: Resource,
        version: &str,
        action: &str,
        parameters: &Parameters,
    ) -> Result<(Value, RequestMeta), MwsError> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let request = self.build_request(method, resource, version, action, parameters, &timestamp);

        tracing::debug!(
            action,
            resource = resource.as_str(),
            method = %method,
            "dispatching MWS request"
        );

        let response = self.transport.send(&request).await.map_err(MwsError::Http)?;
        let document = xml::parse_document(&response.body)?;
        let meta = RequestMeta::from_response(&response.headers, &document);

        Ok((document, meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessKeyId, MarketplaceEndpoint, MwsAuthToken, SecretKey, SellerId};

    fn test_client() -> HttpClient {
        let config = MwsConfig::builder()
            .access_key_id(AccessKeyId::new("AKIAEXAMPLE").unwrap())
            .seller_id(SellerId::new("A2EXAMPLE").unwrap())
            .auth_token(MwsAuthToken::new("amzn.mws.example").unwrap())
            .secret_key(SecretKey::new("secret").unwrap())
            .endpoint(MarketplaceEndpoint::new("https://mws.amazonservices.com").unwrap())
            .build()
            .unwrap();
        HttpClient::new(config)
    }

    #[test]
    fn test_get_request_places_signed_query_in_url() {
        let client = test_client();
        let mut parameters = Parameters::new();
        parameters.insert_list("MarketplaceId.Id", ["X"]);

        let request = client.build_request(
            HttpMethod::Get,
            Resource::Orders,
            "2013-09-01",
            "ListOrders",
            &parameters,
            "2020-05-06T09:22:23.582Z",
        );

        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.body.is_none());
        let (base, query) = request.url.split_once('?').unwrap();
        assert_eq!(base, "https://mws.amazonservices.com/Orders/2013-09-01");
        assert!(query.contains("Action=ListOrders"));
        assert!(query.contains("Signature="));
    }

    #[test]
    fn test_get_query_is_sorted_with_signature_in_place() {
        let client = test_client();
        let mut parameters = Parameters::new();
        parameters.insert_list("MarketplaceId.Id", ["X"]);

        let request = client.build_request(
            HttpMethod::Get,
            Resource::Orders,
            "2013-09-01",
            "ListOrders",
            &parameters,
            "2020-05-06T09:22:23.582Z",
        );

        let (_, query) = request.url.split_once('?').unwrap();
        let keys: Vec<&str> = query
            .split('&')
            .map(|pair| pair.split_once('=').unwrap().0)
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert!(keys.contains(&"Signature"));
    }

    #[test]
    fn test_signature_is_excluded_from_its_own_input() {
        let client = test_client();
        let parameters = Parameters::new();
        let request = client.build_request(
            HttpMethod::Get,
            Resource::Sellers,
            "2011-07-01",
            "GetServiceStatus",
            &parameters,
            "2020-05-06T09:22:23.582Z",
        );

        // Recompute the signature from the query string minus Signature
        // itself; it must match the one the client appended.
        let (_, query) = request.url.split_once('?').unwrap();
        let unsigned: Vec<&str> = query
            .split('&')
            .filter(|pair| !pair.starts_with("Signature="))
            .collect();
        let string_to_sign = sign::string_to_sign(
            HttpMethod::Get,
            "mws.amazonservices.com",
            "/Sellers/2011-07-01",
            &unsigned.join("&"),
        );
        let expected = sign::sign(&string_to_sign, client.config().secret_key());
        let actual = query
            .split('&')
            .find_map(|pair| pair.strip_prefix("Signature="))
            .unwrap();
        assert_eq!(actual, urlencoding::encode(&expected));
    }

    #[test]
    fn test_post_request_places_signed_query_in_body() {
        let client = test_client();
        let request = client.build_request(
            HttpMethod::Post,
            Resource::Orders,
            "2013-09-01",
            "ListOrders",
            &Parameters::new(),
            "2020-05-06T09:22:23.582Z",
        );

        assert_eq!(
            request.url,
            "https://mws.amazonservices.com/Orders/2013-09-01"
        );
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/x-www-form-urlencoded")
        );
        let body = request.body.unwrap();
        assert!(body.contains("Action=ListOrders"));
        assert!(body.contains("Signature="));
    }

    #[test]
    fn test_protocol_parameters_are_always_present() {
        let client = test_client();
        let request = client.build_request(
            HttpMethod::Get,
            Resource::Orders,
            "2013-09-01",
            "ListOrders",
            &Parameters::new(),
            "2020-05-06T09:22:23.582Z",
        );

        let (_, query) = request.url.split_once('?').unwrap();
        for expected in [
            "AWSAccessKeyId=AKIAEXAMPLE",
            "Action=ListOrders",
            "MWSAuthToken=amzn.mws.example",
            "SellerId=A2EXAMPLE",
            "SignatureMethod=HmacSHA256",
            "SignatureVersion=2",
            "Version=2013-09-01",
        ] {
            assert!(query.contains(expected), "missing {expected} in {query}");
        }
        assert!(query.contains("Timestamp=2020-05-06T09%3A22%3A23.582Z"));
    }

    #[test]
    fn test_user_agent_identifies_the_sdk() {
        let client = test_client();
        let request = client.build_request(
            HttpMethod::Get,
            Resource::Sellers,
            "2011-07-01",
            "GetServiceStatus",
            &Parameters::new(),
            "2020-05-06T09:22:23.582Z",
        );
        let user_agent = request.headers.get("User-Agent").unwrap();
        assert!(user_agent.starts_with("mws-sdk/"));
        assert!(user_agent.contains("Rust"));
    }
}
