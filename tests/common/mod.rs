//! Shared test fixtures: a recording mock transport and a canned config.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mws_sdk::client::{HttpError, Transport, TransportRequest, TransportResponse};
use mws_sdk::config::{AccessKeyId, MarketplaceEndpoint, MwsAuthToken, SecretKey, SellerId};
use mws_sdk::{HttpClient, Mws, MwsConfig};

/// The standard header block MWS responses carry.
pub fn mws_headers() -> HashMap<String, String> {
    [
        ("x-mws-request-id", "0"),
        ("x-mws-timestamp", "2020-05-06T09:22:23.582Z"),
        ("x-mws-quota-max", "1000"),
        ("x-mws-quota-remaining", "999"),
        ("x-mws-quota-resetson", "2020-04-06T10:22:23.582Z"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

pub fn test_config() -> MwsConfig {
    MwsConfig::builder()
        .access_key_id(AccessKeyId::new("AKIAEXAMPLE").unwrap())
        .seller_id(SellerId::new("A2EXAMPLE").unwrap())
        .auth_token(MwsAuthToken::new("amzn.mws.example").unwrap())
        .secret_key(SecretKey::new("secret").unwrap())
        .endpoint(MarketplaceEndpoint::new("https://mws.amazonservices.com").unwrap())
        .build()
        .unwrap()
}

pub fn test_config_for(endpoint: &str) -> MwsConfig {
    MwsConfig::builder()
        .access_key_id(AccessKeyId::new("AKIAEXAMPLE").unwrap())
        .seller_id(SellerId::new("A2EXAMPLE").unwrap())
        .auth_token(MwsAuthToken::new("amzn.mws.example").unwrap())
        .secret_key(SecretKey::new("secret").unwrap())
        .endpoint(MarketplaceEndpoint::new(endpoint).unwrap())
        .build()
        .unwrap()
}

/// A transport double that records every request and answers with a canned
/// body and the standard header block.
pub struct MockTransport {
    body: String,
    headers: HashMap<String, String>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            headers: mws_headers(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn without_headers(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            headers: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, HttpError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(TransportResponse {
            body: self.body.clone(),
            headers: self.headers.clone(),
        })
    }
}

/// Wires a mock transport into the section-level API, returning both so
/// tests can assert on the recorded requests.
pub fn mock_mws(transport: MockTransport) -> (Mws, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let client = HttpClient::with_transport(test_config(), transport.clone());
    (Mws::new(client), transport)
}
