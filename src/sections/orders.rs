//! The Orders section: order listings and retrieval.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::client::{HttpClient, HttpMethod, Parameters, RequestMeta, Resource};
use crate::decode::{self, DecodeResult, NextToken, WireEnum};
use crate::error::MwsError;
use crate::sections::shared::{
    decode_envelope, get_service_status_by_resource, iso8601, ServiceStatusResult,
};

const ORDERS_API_VERSION: &str = "2013-09-01";

crate::wire_enum! {
    /// Lifecycle status of an order.
    pub enum OrderStatus {
        PendingAvailability => "PendingAvailability",
        Pending => "Pending",
        Unshipped => "Unshipped",
        PartiallyShipped => "PartiallyShipped",
        Shipped => "Shipped",
        Canceled => "Canceled",
        Unfulfillable => "Unfulfillable",
    }
}

crate::wire_enum! {
    /// Who fulfills the order: the fulfillment network or the seller.
    pub enum FulfillmentChannel {
        Afn => "AFN",
        Mfn => "MFN",
    }
}

crate::wire_enum! {
    /// How the buyer paid.
    pub enum PaymentMethod {
        Cod => "COD",
        Cvs => "CVS",
        Other => "Other",
    }
}

crate::wire_enum! {
    /// Classification of a shipping address.
    pub enum AddressType {
        Commercial => "Commercial",
        Residential => "Residential",
    }
}

crate::wire_enum! {
    /// Status of an Easy Ship shipment. `ReturningToSller` is the literal
    /// the service emits.
    pub enum EasyShipShipmentStatus {
        PendingPickUp => "PendingPickUp",
        LabelCanceled => "LabelCanceled",
        PickedUp => "PickedUp",
        OutForDelivery => "OutForDelivery",
        Damaged => "Damaged",
        Delivered => "Delivered",
        RejectedByBuyer => "RejectedByBuyer",
        Undeliverable => "Undeliverable",
        ReturnedToSeller => "ReturnedToSeller",
        ReturningToSller => "ReturningToSller",
        Lost => "Lost",
    }
}

/// A monetary amount with its currency.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Money {
    /// ISO 4217 currency code.
    pub currency_code: Option<String>,
    /// The amount.
    pub amount: Option<f64>,
}

/// A shipping address.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Address {
    /// Addressee name.
    pub name: String,
    /// First street line.
    pub address_line_1: Option<String>,
    /// Second street line.
    pub address_line_2: Option<String>,
    /// Third street line.
    pub address_line_3: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Municipality.
    pub municipality: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// District.
    pub district: Option<String>,
    /// State or region.
    pub state_or_region: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// ISO 3166-1 country code.
    pub country_code: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Commercial or residential classification.
    pub address_type: Option<AddressType>,
}

/// A named tax classification value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaxClassification {
    /// Classification name.
    pub name: String,
    /// Classification value.
    pub value: String,
}

/// Tax information about the buyer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuyerTaxInfo {
    /// Legal name of the buyer's company.
    pub company_legal_name: Option<String>,
    /// Region the buyer is taxed in.
    pub taxing_region: Option<String>,
    /// The buyer's tax classification.
    pub tax_classification: Option<TaxClassification>,
}

/// One payment within an order paid via multiple methods.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentExecutionDetailItem {
    /// Amount covered by this sub-payment.
    pub payment: Money,
    /// Sub-payment method.
    pub payment_method: String,
}

/// A seller order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Order {
    /// Amazon-defined order id.
    pub amazon_order_id: String,
    /// Seller-defined order id.
    pub seller_order_id: Option<String>,
    /// When the order was placed.
    pub purchase_date: DateTime<Utc>,
    /// When the order was last updated.
    pub last_update_date: DateTime<Utc>,
    /// Current status.
    pub order_status: OrderStatus,
    /// Fulfillment channel.
    pub fulfillment_channel: Option<FulfillmentChannel>,
    /// Sales channel of the first item.
    pub sales_channel: Option<String>,
    /// Shipment service level.
    pub ship_service_level: Option<String>,
    /// Shipping address.
    pub shipping_address: Option<Address>,
    /// Order total.
    pub order_total: Option<Money>,
    /// Number of items shipped.
    pub number_of_items_shipped: Option<f64>,
    /// Number of items not yet shipped.
    pub number_of_items_unshipped: Option<f64>,
    /// Sub-payments for multi-method orders.
    pub payment_execution_detail: Option<Vec<PaymentExecutionDetailItem>>,
    /// Main payment method.
    pub payment_method: Option<String>,
    /// Detailed payment method, when present.
    pub payment_method_details: Option<String>,
    /// Whether this order replaces another.
    pub is_replacement_order: Option<bool>,
    /// The order this one replaces.
    pub replaced_order_id: Option<String>,
    /// Marketplace the order was placed in.
    pub marketplace_id: Option<String>,
    /// Anonymized buyer e-mail.
    pub buyer_email: Option<String>,
    /// Buyer name.
    pub buyer_name: Option<String>,
    /// Buyer county.
    pub buyer_county: Option<String>,
    /// Buyer tax information.
    pub buyer_tax_info: Option<BuyerTaxInfo>,
    /// Shipment service level category.
    pub shipment_service_level_category: Option<String>,
    /// Easy Ship status, for Easy Ship orders.
    pub easy_ship_shipment_status: Option<String>,
    /// Order type.
    pub order_type: Option<String>,
    /// Start of the shipping window.
    pub earliest_ship_date: Option<DateTime<Utc>>,
    /// End of the shipping window.
    pub latest_ship_date: Option<DateTime<Utc>>,
    /// Start of the delivery window.
    pub earliest_delivery_date: Option<DateTime<Utc>>,
    /// End of the delivery window.
    pub latest_delivery_date: Option<DateTime<Utc>>,
    /// Whether the buyer is a business.
    pub is_business_order: Option<bool>,
    /// Whether the item was sold by Amazon Business EU.
    pub is_sold_by_ab: Option<bool>,
    /// The buyer's purchase order number, for business orders.
    pub purchase_order_number: Option<String>,
    /// Whether this is a Prime order.
    pub is_prime: Option<bool>,
    /// Whether this is a premium-shipping order.
    pub is_premium_order: Option<bool>,
    /// Whether Global Express is enabled.
    pub is_global_express_enabled: Option<bool>,
    /// Deadline for responding to the shipping promise.
    pub promise_response_due_date: Option<DateTime<Utc>>,
    /// Whether the estimated ship date is set.
    pub is_estimated_ship_date_set: Option<bool>,
}

/// Decoded result of `ListOrders` (and its continuation).
#[derive(Clone, Debug, Serialize)]
pub struct ListOrdersResult {
    /// Continuation token for the next page, when more data exists.
    pub next_token: Option<NextToken>,
    /// Upper bound of the update window the listing covered.
    pub last_updated_before: Option<DateTime<Utc>>,
    /// Upper bound of the creation window the listing covered.
    pub created_before: Option<DateTime<Utc>>,
    /// The orders on this page.
    pub orders: Vec<Order>,
}

/// Decoded result of `GetOrder`.
#[derive(Clone, Debug, Serialize)]
pub struct GetOrderResult {
    /// The requested orders.
    pub orders: Vec<Order>,
}

/// Caller-supplied filters for `ListOrders`.
///
/// `marketplace_id` is required; everything else narrows the listing.
#[derive(Clone, Debug, Default)]
pub struct ListOrdersParameters {
    /// Marketplaces to list orders from. Required.
    pub marketplace_id: Vec<String>,
    /// Only orders created after this instant.
    pub created_after: Option<DateTime<Utc>>,
    /// Only orders created before this instant.
    pub created_before: Option<DateTime<Utc>>,
    /// Only orders updated after this instant.
    pub last_updated_after: Option<DateTime<Utc>>,
    /// Only orders updated before this instant.
    pub last_updated_before: Option<DateTime<Utc>>,
    /// Only orders in these statuses.
    pub order_status: Option<Vec<OrderStatus>>,
    /// Only orders fulfilled through these channels.
    pub fulfillment_channel: Option<Vec<FulfillmentChannel>>,
    /// Only orders paid with these methods.
    pub payment_method: Option<Vec<PaymentMethod>>,
    /// Only Easy Ship orders in these statuses.
    pub easy_ship_shipment_status: Option<Vec<EasyShipShipmentStatus>>,
    /// Only orders from this buyer e-mail.
    pub buyer_email: Option<String>,
    /// Only the order with this seller-defined id.
    pub seller_order_id: Option<String>,
    /// Page size cap.
    pub max_results_per_page: Option<u16>,
}

impl ListOrdersParameters {
    fn to_parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        parameters.insert_list("MarketplaceId.Id", self.marketplace_id.clone());
        parameters.insert_opt("CreatedAfter", self.created_after.as_ref().map(iso8601));
        parameters.insert_opt("CreatedBefore", self.created_before.as_ref().map(iso8601));
        parameters.insert_opt(
            "LastUpdatedAfter",
            self.last_updated_after.as_ref().map(iso8601),
        );
        parameters.insert_opt(
            "LastUpdatedBefore",
            self.last_updated_before.as_ref().map(iso8601),
        );
        parameters.insert_opt_list(
            "OrderStatus.Status",
            self.order_status
                .as_ref()
                .map(|list| list.iter().map(|v| v.as_wire()).collect::<Vec<_>>()),
        );
        parameters.insert_opt_list(
            "FulfillmentChannel.Channel",
            self.fulfillment_channel
                .as_ref()
                .map(|list| list.iter().map(|v| v.as_wire()).collect::<Vec<_>>()),
        );
        parameters.insert_opt_list(
            "PaymentMethod.Method",
            self.payment_method
                .as_ref()
                .map(|list| list.iter().map(|v| v.as_wire()).collect::<Vec<_>>()),
        );
        parameters.insert_opt_list(
            "EasyShipShipmentStatus.Status",
            self.easy_ship_shipment_status
                .as_ref()
                .map(|list| list.iter().map(|v| v.as_wire()).collect::<Vec<_>>()),
        );
        parameters.insert_opt("BuyerEmail", self.buyer_email.clone());
        parameters.insert_opt("SellerOrderId", self.seller_order_id.clone());
        parameters.insert_opt(
            "MaxResultsPerPage",
            self.max_results_per_page.map(|n| n.to_string()),
        );
        parameters
    }
}

fn decode_money(value: &Value) -> DecodeResult<Money> {
    let object = decode::object(value)?;
    Ok(Money {
        currency_code: decode::optional_field(object, "CurrencyCode", decode::string)?,
        amount: decode::optional_field(object, "Amount", decode::number)?,
    })
}

fn decode_address(value: &Value) -> DecodeResult<Address> {
    let object = decode::object(value)?;
    Ok(Address {
        name: decode::field(object, "Name", decode::string)?,
        address_line_1: decode::optional_field(object, "AddressLine1", decode::string)?,
        address_line_2: decode::optional_field(object, "AddressLine2", decode::string)?,
        address_line_3: decode::optional_field(object, "AddressLine3", decode::string)?,
        city: decode::optional_field(object, "City", decode::string)?,
        municipality: decode::optional_field(object, "Municipality", decode::string)?,
        country: decode::optional_field(object, "Country", decode::string)?,
        district: decode::optional_field(object, "District", decode::string)?,
        state_or_region: decode::optional_field(object, "StateOrRegion", decode::string)?,
        postal_code: decode::optional_field(object, "PostalCode", decode::ensure_string)?,
        country_code: decode::optional_field(object, "CountryCode", decode::string)?,
        phone: decode::optional_field(object, "Phone", decode::ensure_string)?,
        address_type: decode::optional_field(object, "AddressType", decode::enumeration)?,
    })
}

fn decode_tax_classification(value: &Value) -> DecodeResult<TaxClassification> {
    let object = decode::object(value)?;
    Ok(TaxClassification {
        name: decode::field(object, "Name", decode::string)?,
        value: decode::field(object, "Value", decode::ensure_string)?,
    })
}

fn decode_buyer_tax_info(value: &Value) -> DecodeResult<BuyerTaxInfo> {
    let object = decode::object(value)?;
    Ok(BuyerTaxInfo {
        company_legal_name: decode::optional_field(object, "CompanyLegalName", decode::string)?,
        taxing_region: decode::optional_field(object, "TaxingRegion", decode::string)?,
        tax_classification: decode::optional_field(object, "TaxClassifications", |wrapper| {
            let wrapper = decode::object(wrapper)?;
            decode::field(wrapper, "TaxClassification", decode_tax_classification)
        })?,
    })
}

fn decode_payment_execution_detail_item(value: &Value) -> DecodeResult<PaymentExecutionDetailItem> {
    let object = decode::object(value)?;
    Ok(PaymentExecutionDetailItem {
        payment: decode::field(object, "Payment", decode_money)?,
        payment_method: decode::field(object, "PaymentMethod", decode::string)?,
    })
}

#[allow(clippy::too_many_lines)]
fn decode_order(value: &Value) -> DecodeResult<Order> {
    let object = decode::object(value)?;
    Ok(Order {
        amazon_order_id: decode::field(object, "AmazonOrderId", decode::ensure_string)?,
        seller_order_id: decode::optional_field(object, "SellerOrderId", decode::ensure_string)?,
        purchase_date: decode::field(object, "PurchaseDate", decode::datetime)?,
        last_update_date: decode::field(object, "LastUpdateDate", decode::datetime)?,
        order_status: decode::field(object, "OrderStatus", decode::enumeration)?,
        fulfillment_channel: decode::optional_field(
            object,
            "FulfillmentChannel",
            decode::enumeration,
        )?,
        sales_channel: decode::optional_field(object, "SalesChannel", decode::string)?,
        ship_service_level: decode::optional_field(object, "ShipServiceLevel", decode::string)?,
        shipping_address: decode::optional_field(object, "ShippingAddress", decode_address)?,
        order_total: decode::optional_field(object, "OrderTotal", decode_money)?,
        number_of_items_shipped: decode::optional_field(
            object,
            "NumberOfItemsShipped",
            decode::number,
        )?,
        number_of_items_unshipped: decode::optional_field(
            object,
            "NumberOfItemsUnshipped",
            decode::number,
        )?,
        payment_execution_detail: decode::optional_field(
            object,
            "PaymentExecutionDetail",
            |list| {
                decode::ensure_array(
                    list,
                    "PaymentExecutionDetailItem",
                    decode_payment_execution_detail_item,
                )
            },
        )?,
        payment_method: decode::optional_field(object, "PaymentMethod", decode::string)?,
        payment_method_details: decode::optional_field(
            object,
            "PaymentMethodDetails",
            |wrapper| {
                let wrapper = decode::object(wrapper)?;
                decode::optional_field(wrapper, "PaymentMethodDetail", decode::string)
            },
        )?
        .flatten(),
        is_replacement_order: decode::optional_field(
            object,
            "IsReplacementOrder",
            decode::boolean,
        )?,
        replaced_order_id: decode::optional_field(object, "ReplacedOrderId", decode::ensure_string)?,
        marketplace_id: decode::optional_field(object, "MarketplaceId", decode::string)?,
        buyer_email: decode::optional_field(object, "BuyerEmail", decode::string)?,
        buyer_name: decode::optional_field(object, "BuyerName", decode::string)?,
        buyer_county: decode::optional_field(object, "BuyerCounty", decode::string)?,
        buyer_tax_info: decode::optional_field(object, "BuyerTaxInfo", decode_buyer_tax_info)?,
        shipment_service_level_category: decode::optional_field(
            object,
            "ShipmentServiceLevelCategory",
            decode::string,
        )?,
        easy_ship_shipment_status: decode::optional_field(
            object,
            "EasyShipShipmentStatus",
            decode::string,
        )?,
        order_type: decode::optional_field(object, "OrderType", decode::string)?,
        earliest_ship_date: decode::optional_field(object, "EarliestShipDate", decode::datetime)?,
        latest_ship_date: decode::optional_field(object, "LatestShipDate", decode::datetime)?,
        earliest_delivery_date: decode::optional_field(
            object,
            "EarliestDeliveryDate",
            decode::datetime,
        )?,
        latest_delivery_date: decode::optional_field(
            object,
            "LatestDeliveryDate",
            decode::datetime,
        )?,
        is_business_order: decode::optional_field(object, "IsBusinessOrder", decode::boolean)?,
        is_sold_by_ab: decode::optional_field(object, "IsSoldByAB", decode::boolean)?,
        purchase_order_number: decode::optional_field(
            object,
            "PurchaseOrderNumber",
            decode::ensure_string,
        )?,
        is_prime: decode::optional_field(object, "IsPrime", decode::boolean)?,
        is_premium_order: decode::optional_field(object, "IsPremiumOrder", decode::boolean)?,
        is_global_express_enabled: decode::optional_field(
            object,
            "IsGlobalExpressEnabled",
            decode::boolean,
        )?,
        promise_response_due_date: decode::optional_field(
            object,
            "PromiseResponseDueDate",
            decode::datetime,
        )?,
        is_estimated_ship_date_set: decode::optional_field(
            object,
            "IsEstimatedShipDateSet",
            decode::boolean,
        )?,
    })
}

fn decode_list_orders_result(value: &Value) -> DecodeResult<ListOrdersResult> {
    let object = decode::object(value)?;
    Ok(ListOrdersResult {
        next_token: decode::optional_field(object, "NextToken", decode::next_token("ListOrders"))?,
        last_updated_before: decode::optional_field(
            object,
            "LastUpdatedBefore",
            decode::datetime,
        )?,
        created_before: decode::optional_field(object, "CreatedBefore", decode::datetime)?,
        orders: decode::field(object, "Orders", |list| {
            decode::ensure_array(list, "Order", decode_order)
        })?,
    })
}

fn decode_get_order_result(value: &Value) -> DecodeResult<GetOrderResult> {
    let object = decode::object(value)?;
    Ok(GetOrderResult {
        orders: decode::field(object, "Orders", |list| {
            decode::ensure_array(list, "Order", decode_order)
        })?,
    })
}

/// Operations of the `Orders` resource.
pub struct Orders<'a> {
    pub(crate) client: &'a HttpClient,
}

impl Orders<'_> {
    /// Lists orders created or updated within the given windows.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn list_orders(
        &self,
        parameters: &ListOrdersParameters,
    ) -> Result<(ListOrdersResult, RequestMeta), MwsError> {
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Orders,
                ORDERS_API_VERSION,
                "ListOrders",
                &parameters.to_parameters(),
            )
            .await?;
        let result = decode_envelope(
            &response,
            "ListOrdersResponse",
            "ListOrdersResult",
            decode_list_orders_result,
        )?;
        Ok((result, meta))
    }

    /// Continues an order listing from a previous page's token.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn list_orders_by_next_token(
        &self,
        next_token: &NextToken,
    ) -> Result<(ListOrdersResult, RequestMeta), MwsError> {
        let mut parameters = Parameters::new();
        parameters.insert_next_token(next_token);
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Orders,
                ORDERS_API_VERSION,
                "ListOrdersByNextToken",
                &parameters,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "ListOrdersByNextTokenResponse",
            "ListOrdersByNextTokenResult",
            decode_list_orders_result,
        )?;
        Ok((result, meta))
    }

    /// Fetches orders by their Amazon order ids (up to 50 per call).
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn get_order(
        &self,
        amazon_order_ids: &[String],
    ) -> Result<(GetOrderResult, RequestMeta), MwsError> {
        let mut parameters = Parameters::new();
        parameters.insert_list("AmazonOrderId.Id", amazon_order_ids.to_vec());
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Orders,
                ORDERS_API_VERSION,
                "GetOrder",
                &parameters,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "GetOrderResponse",
            "GetOrderResult",
            decode_get_order_result,
        )?;
        Ok((result, meta))
    }

    /// Reports the operational status of the Orders API.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn get_service_status(
        &self,
    ) -> Result<(ServiceStatusResult, RequestMeta), MwsError> {
        get_service_status_by_resource(self.client, Resource::Orders, ORDERS_API_VERSION).await
    }
}
