//! The Subscriptions section: push notification subscriptions.

use crate::client::{HttpClient, RequestMeta, Resource};
use crate::error::MwsError;
use crate::sections::shared::{get_service_status_by_resource, ServiceStatusResult};

const SUBSCRIPTIONS_API_VERSION: &str = "2013-07-01";

/// Operations of the `Subscriptions` resource.
pub struct Subscriptions<'a> {
    pub(crate) client: &'a HttpClient,
}

impl Subscriptions<'_> {
    /// Reports the operational status of the Subscriptions API.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn get_service_status(
        &self,
    ) -> Result<(ServiceStatusResult, RequestMeta), MwsError> {
        get_service_status_by_resource(
            self.client,
            Resource::Subscriptions,
            SUBSCRIPTIONS_API_VERSION,
        )
        .await
    }
}
