//! Decoding helpers shared by every section.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::client::{HttpClient, HttpMethod, RequestMeta, Resource};
use crate::decode::{self, DecodeResult};
use crate::error::MwsError;

crate::wire_enum! {
    /// Operational status of an MWS API section.
    pub enum ServiceStatus {
        Green => "GREEN",
        GreenI => "GREEN_I",
        Yellow => "YELLOW",
        Red => "RED",
    }
}

/// The decoded result of a `GetServiceStatus` call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceStatusResult {
    /// Current operational status.
    pub status: ServiceStatus,
    /// When the status was measured.
    pub timestamp: DateTime<Utc>,
}

/// Unwraps the standard `<ActionResponse><ActionResult>` envelope and
/// applies the section's decoder to the result element.
///
/// The single place where a decode failure becomes a reported
/// [`MwsError`]; section operations never hand the raw failure back
/// uninterpreted.
pub(crate) fn decode_envelope<T, F>(
    document: &Value,
    response_key: &str,
    result_key: &str,
    decoder: F,
) -> Result<T, MwsError>
where
    F: FnOnce(&Value) -> DecodeResult<T>,
{
    let decoded = (|| {
        let root = decode::object(document)?;
        decode::field(root, response_key, |envelope| {
            let envelope = decode::object(envelope)?;
            decode::field(envelope, result_key, decoder)
        })
    })();
    decoded.map_err(MwsError::from)
}

/// Formats a request date parameter the way the protocol timestamps are
/// formatted.
pub(crate) fn iso8601(when: &DateTime<Utc>) -> String {
    when.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn decode_service_status(value: &Value) -> DecodeResult<ServiceStatusResult> {
    let object = decode::object(value)?;
    Ok(ServiceStatusResult {
        status: decode::field(object, "Status", decode::enumeration)?,
        timestamp: decode::field(object, "Timestamp", decode::datetime)?,
    })
}

/// Issues `GetServiceStatus` against the given resource; every section's
/// `get_service_status` goes through here.
pub(crate) async fn get_service_status_by_resource(
    client: &HttpClient,
    resource: Resource,
    version: &str,
) -> Result<(ServiceStatusResult, RequestMeta), MwsError> {
    let (response, meta) = client
        .request(
            HttpMethod::Get,
            resource,
            version,
            "GetServiceStatus",
            &crate::client::Parameters::new(),
        )
        .await?;
    let result = decode_envelope(
        &response,
        "GetServiceStatusResponse",
        "GetServiceStatusResult",
        decode_service_status,
    )?;
    Ok((result, meta))
}
