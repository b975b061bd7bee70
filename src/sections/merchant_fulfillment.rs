//! The MerchantFulfillment section: seller-shipped label purchasing.

use crate::client::{HttpClient, RequestMeta, Resource};
use crate::error::MwsError;
use crate::sections::shared::{get_service_status_by_resource, ServiceStatusResult};

const MERCHANT_FULFILLMENT_API_VERSION: &str = "2015-06-01";

/// Operations of the `MerchantFulfillment` resource.
pub struct MerchantFulfillment<'a> {
    pub(crate) client: &'a HttpClient,
}

impl MerchantFulfillment<'_> {
    /// Reports the operational status of the MerchantFulfillment API.
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
            Resource::MerchantFulfillment,
            MERCHANT_FULFILLMENT_API_VERSION,
        )
        .await
    }
}
