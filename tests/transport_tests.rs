//! Round trips through the real reqwest transport against a wiremock
//! server.

mod common;

use common::test_config_for;
use mws_sdk::client::{HttpError, ReqwestTransport, Transport};
use mws_sdk::sections::ServiceStatus;
use mws_sdk::{HttpClient, Mws, MwsError};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVICE_STATUS_BODY: &str = r#"<?xml version="1.0"?>
<GetServiceStatusResponse>
  <GetServiceStatusResult>
    <Status>GREEN</Status>
    <Timestamp>2020-05-06T08:22:23.582Z</Timestamp>
  </GetServiceStatusResult>
  <ResponseMetadata>
    <RequestId>d384713e-7da2-441b-9b10-a6b331900632</RequestId>
  </ResponseMetadata>
</GetServiceStatusResponse>"#;

fn mws_for(server: &MockServer) -> Mws {
    let config = test_config_for(&server.uri());
    Mws::new(HttpClient::with_transport(
        config,
        Arc::new(ReqwestTransport::new()),
    ))
}

#[tokio::test]
async fn test_get_service_status_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Sellers/2011-07-01"))
        .and(query_param("Action", "GetServiceStatus"))
        .and(query_param("SignatureVersion", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(SERVICE_STATUS_BODY)
                .insert_header("x-mws-request-id", "0")
                .insert_header("x-mws-quota-max", "1000")
                .insert_header("x-mws-quota-remaining", "999"),
        )
        .mount(&mock_server)
        .await;

    let mws = mws_for(&mock_server);
    let (status, meta) = mws.sellers().get_service_status().await.unwrap();

    assert_eq!(status.status, ServiceStatus::Green);
    assert_eq!(meta.quota_max, Some(1000.0));
    assert_eq!(meta.quota_remaining, Some(999.0));
    assert_eq!(meta.request_id.as_deref(), Some("0"));
}

#[tokio::test]
async fn test_non_2xx_surfaces_as_response_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_string("<ErrorResponse><Error><Code>RequestThrottled</Code></Error></ErrorResponse>")
                .insert_header("x-mws-request-id", "throttled-1"),
        )
        .mount(&mock_server)
        .await;

    let mws = mws_for(&mock_server);
    let error = mws.sellers().get_service_status().await.unwrap_err();

    match error {
        MwsError::Http(HttpError::Response(response)) => {
            assert_eq!(response.code, 503);
            assert!(response.body.contains("RequestThrottled"));
            assert_eq!(response.request_id.as_deref(), Some("throttled-1"));
        }
        other => panic!("expected an HTTP response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_lowercases_response_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<A>ok</A>")
                .insert_header("X-MWS-Request-Id", "mixed-case"),
        )
        .mount(&mock_server)
        .await;

    let transport = ReqwestTransport::new();
    let request = mws_sdk::client::TransportRequest {
        method: mws_sdk::client::HttpMethod::Get,
        url: mock_server.uri(),
        headers: std::collections::HashMap::new(),
        body: None,
    };
    let response = transport.send(&request).await.unwrap();

    assert_eq!(
        response.headers.get("x-mws-request-id").map(String::as_str),
        Some("mixed-case")
    );
    assert_eq!(response.body, "<A>ok</A>");
}

#[tokio::test]
async fn test_connection_failure_is_a_network_error() {
    // Port 9 (discard) is not listening.
    let config = test_config_for("http://127.0.0.1:9");
    let mws = Mws::new(HttpClient::new(config));

    let error = mws.sellers().get_service_status().await.unwrap_err();
    assert!(matches!(error, MwsError::Http(HttpError::Network(_))));
}
