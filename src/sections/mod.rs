//! Resource sections of the MWS API.
//!
//! Each section owns its decoders (built from [`crate::decode`] primitives)
//! and calls the dispatcher; [`Mws`] hands out per-section handles borrowing
//! one shared [`HttpClient`].

pub mod finances;
pub mod fulfillment_inbound_shipment;
pub mod merchant_fulfillment;
pub mod orders;
pub mod reports;
pub mod sellers;
pub(crate) mod shared;
pub mod subscriptions;

pub use shared::{ServiceStatus, ServiceStatusResult};

use crate::client::HttpClient;

/// Entry point to every MWS section.
///
/// # Example
///
/// ```rust,ignore
/// use mws_sdk::{HttpClient, Mws};
///
/// let mws = Mws::new(HttpClient::new(config));
/// let (orders, meta) = mws.orders().list_orders(&parameters).await?;
/// ```
#[derive(Debug)]
pub struct Mws {
    client: HttpClient,
}

impl Mws {
    /// Wraps a client in the section-level API.
    #[must_use]
    pub const fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// The Sellers section.
    #[must_use]
    pub const fn sellers(&self) -> sellers::Sellers<'_> {
        sellers::Sellers {
            client: &self.client,
        }
    }

    /// The Orders section.
    #[must_use]
    pub const fn orders(&self) -> orders::Orders<'_> {
        orders::Orders {
            client: &self.client,
        }
    }

    /// The Finances section.
    #[must_use]
    pub const fn finances(&self) -> finances::Finances<'_> {
        finances::Finances {
            client: &self.client,
        }
    }

    /// The Reports section.
    #[must_use]
    pub const fn reports(&self) -> reports::Reports<'_> {
        reports::Reports {
            client: &self.client,
        }
    }

    /// The FulfillmentInboundShipment section.
    #[must_use]
    pub const fn fulfillment_inbound_shipment(
        &self,
    ) -> fulfillment_inbound_shipment::FulfillmentInboundShipment<'_> {
        fulfillment_inbound_shipment::FulfillmentInboundShipment {
            client: &self.client,
        }
    }

    /// The MerchantFulfillment section.
    #[must_use]
    pub const fn merchant_fulfillment(&self) -> merchant_fulfillment::MerchantFulfillment<'_> {
        merchant_fulfillment::MerchantFulfillment {
            client: &self.client,
        }
    }

    /// The Subscriptions section.
    #[must_use]
    pub const fn subscriptions(&self) -> subscriptions::Subscriptions<'_> {
        subscriptions::Subscriptions {
            client: &self.client,
        }
    }
}
