//! The Reports section: requesting reports and tracking their processing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::client::{HttpClient, HttpMethod, Parameters, RequestMeta, Resource};
use crate::decode::{self, DecodeResult, NextToken};
use crate::error::MwsError;
use crate::sections::shared::{
    decode_envelope, get_service_status_by_resource, iso8601, ServiceStatusResult,
};

const REPORTS_API_VERSION: &str = "2009-01-01";

/// The processing state of a requested report.
///
/// Documented as a closed set of underscore-delimited literals, but kept as
/// text: the documentation has been incomplete for other literal sets in
/// this API.
pub type ReportProcessingStatus = String;

/// A report request and its processing state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportRequestInfo {
    /// Identifier of the report request.
    pub report_request_id: String,
    /// The requested report type.
    pub report_type: Option<String>,
    /// Start of the data window.
    pub start_date: Option<DateTime<Utc>>,
    /// End of the data window.
    pub end_date: Option<DateTime<Utc>>,
    /// Whether the request came from a schedule.
    pub scheduled: Option<bool>,
    /// When the request was submitted.
    pub submitted_date: Option<DateTime<Utc>>,
    /// Current processing state.
    pub report_processing_status: Option<ReportProcessingStatus>,
    /// Identifier of the generated report, once processing is done.
    pub generated_report_id: Option<String>,
    /// When processing started.
    pub started_processing_date: Option<DateTime<Utc>>,
    /// When processing completed.
    pub completed_date: Option<DateTime<Utc>>,
}

/// Decoded result of `RequestReport`.
#[derive(Clone, Debug, Serialize)]
pub struct RequestReportResult {
    /// The newly created report request.
    pub report_request_info: ReportRequestInfo,
}

/// Decoded result of `GetReportRequestList` (and its continuation).
#[derive(Clone, Debug, Serialize)]
pub struct GetReportRequestListResult {
    /// Continuation token for the next page, when more data exists.
    pub next_token: Option<NextToken>,
    /// Whether another page exists.
    pub has_next: Option<bool>,
    /// The report requests on this page.
    pub report_request_info_list: Vec<ReportRequestInfo>,
}

/// Caller-supplied parameters for `RequestReport`.
#[derive(Clone, Debug, Default)]
pub struct RequestReportParameters {
    /// The report type to generate. Required.
    pub report_type: String,
    /// Start of the data window.
    pub start_date: Option<DateTime<Utc>>,
    /// End of the data window.
    pub end_date: Option<DateTime<Utc>>,
    /// Marketplaces the report should cover.
    pub marketplace_id_list: Option<Vec<String>>,
}

/// Caller-supplied filters for `GetReportRequestList`.
#[derive(Clone, Debug, Default)]
pub struct GetReportRequestListParameters {
    /// Only these report request ids.
    pub report_request_id_list: Option<Vec<String>>,
    /// Only these report types.
    pub report_type_list: Option<Vec<String>>,
    /// Only requests in these processing states.
    pub report_processing_status_list: Option<Vec<String>>,
    /// Page size cap.
    pub max_count: Option<u16>,
    /// Only requests submitted after this instant.
    pub requested_from_date: Option<DateTime<Utc>>,
    /// Only requests submitted before this instant.
    pub requested_to_date: Option<DateTime<Utc>>,
}

fn decode_report_request_info(value: &Value) -> DecodeResult<ReportRequestInfo> {
    let object = decode::object(value)?;
    Ok(ReportRequestInfo {
        report_request_id: decode::field(object, "ReportRequestId", decode::ensure_string)?,
        report_type: decode::optional_field(object, "ReportType", decode::string)?,
        start_date: decode::optional_field(object, "StartDate", decode::datetime)?,
        end_date: decode::optional_field(object, "EndDate", decode::datetime)?,
        scheduled: decode::optional_field(object, "Scheduled", decode::boolean)?,
        submitted_date: decode::optional_field(object, "SubmittedDate", decode::datetime)?,
        report_processing_status: decode::optional_field(
            object,
            "ReportProcessingStatus",
            decode::string,
        )?,
        generated_report_id: decode::optional_field(
            object,
            "GeneratedReportId",
            decode::ensure_string,
        )?,
        started_processing_date: decode::optional_field(
            object,
            "StartedProcessingDate",
            decode::datetime,
        )?,
        completed_date: decode::optional_field(object, "CompletedDate", decode::datetime)?,
    })
}

fn decode_request_report_result(value: &Value) -> DecodeResult<RequestReportResult> {
    let object = decode::object(value)?;
    Ok(RequestReportResult {
        report_request_info: decode::field(
            object,
            "ReportRequestInfo",
            decode_report_request_info,
        )?,
    })
}

// `ReportRequestInfo` elements repeat directly under the result element,
// with no wrapper list element around them.
fn decode_report_request_list_result(value: &Value) -> DecodeResult<GetReportRequestListResult> {
    let object = decode::object(value)?;
    Ok(GetReportRequestListResult {
        next_token: decode::optional_field(
            object,
            "NextToken",
            decode::next_token("GetReportRequestList"),
        )?,
        has_next: decode::optional_field(object, "HasNext", decode::boolean)?,
        report_request_info_list: decode::ensure_array(
            value,
            "ReportRequestInfo",
            decode_report_request_info,
        )?,
    })
}

/// Operations of the `Reports` resource.
pub struct Reports<'a> {
    pub(crate) client: &'a HttpClient,
}

impl Reports<'_> {
    /// Creates a report request for the given report type.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn request_report(
        &self,
        parameters: &RequestReportParameters,
    ) -> Result<(RequestReportResult, RequestMeta), MwsError> {
        let mut wire = Parameters::new();
        wire.insert("ReportType", parameters.report_type.clone());
        wire.insert_opt("StartDate", parameters.start_date.as_ref().map(iso8601));
        wire.insert_opt("EndDate", parameters.end_date.as_ref().map(iso8601));
        wire.insert_opt_list(
            "MarketplaceIdList.Id",
            parameters.marketplace_id_list.clone(),
        );
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Reports,
                REPORTS_API_VERSION,
                "RequestReport",
                &wire,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "RequestReportResponse",
            "RequestReportResult",
            decode_request_report_result,
        )?;
        Ok((result, meta))
    }

    /// Lists report requests and their processing states.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn get_report_request_list(
        &self,
        parameters: &GetReportRequestListParameters,
    ) -> Result<(GetReportRequestListResult, RequestMeta), MwsError> {
        let mut wire = Parameters::new();
        wire.insert_opt_list(
            "ReportRequestIdList.Id",
            parameters.report_request_id_list.clone(),
        );
        wire.insert_opt_list("ReportTypeList.Type", parameters.report_type_list.clone());
        wire.insert_opt_list(
            "ReportProcessingStatusList.Status",
            parameters.report_processing_status_list.clone(),
        );
        wire.insert_opt("MaxCount", parameters.max_count.map(|n| n.to_string()));
        wire.insert_opt(
            "RequestedFromDate",
            parameters.requested_from_date.as_ref().map(iso8601),
        );
        wire.insert_opt(
            "RequestedToDate",
            parameters.requested_to_date.as_ref().map(iso8601),
        );
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Reports,
                REPORTS_API_VERSION,
                "GetReportRequestList",
                &wire,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "GetReportRequestListResponse",
            "GetReportRequestListResult",
            decode_report_request_list_result,
        )?;
        Ok((result, meta))
    }

    /// Continues a report request listing from a previous page's token.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn get_report_request_list_by_next_token(
        &self,
        next_token: &NextToken,
    ) -> Result<(GetReportRequestListResult, RequestMeta), MwsError> {
        let mut parameters = Parameters::new();
        parameters.insert_next_token(next_token);
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Reports,
                REPORTS_API_VERSION,
                "GetReportRequestListByNextToken",
                &parameters,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "GetReportRequestListByNextTokenResponse",
            "GetReportRequestListByNextTokenResult",
            decode_report_request_list_result,
        )?;
        Ok((result, meta))
    }

    /// Reports the operational status of the Reports API.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn get_service_status(
        &self,
    ) -> Result<(ServiceStatusResult, RequestMeta), MwsError> {
        get_service_status_by_resource(self.client, Resource::Reports, REPORTS_API_VERSION).await
    }
}
