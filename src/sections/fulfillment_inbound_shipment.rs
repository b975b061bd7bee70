//! The FulfillmentInboundShipment section: inbound guidance lookups and
//! shipment planning.
//!
//! Shipment requests carry nested structures (addresses, item lists, prep
//! details) that flatten onto the wire as dotted parameter names with
//! one-based `member` indexes.

use serde::Serialize;
use serde_json::Value;

use crate::client::{HttpClient, HttpMethod, Parameters, RequestMeta, Resource};
use crate::decode::{self, DecodeResult, WireEnum};
use crate::error::MwsError;
use crate::sections::shared::{decode_envelope, get_service_status_by_resource, ServiceStatusResult};

const FULFILLMENT_INBOUND_SHIPMENT_API_VERSION: &str = "2010-10-01";

crate::wire_enum! {
    /// Why inbound shipping is or is not recommended for an item.
    pub enum GuidanceReason {
        SlowMovingAsin => "SlowMovingASIN",
        NoApplicableGuidance => "NoApplicableGuidance",
    }
}

crate::wire_enum! {
    /// Whether sending an item inbound is recommended.
    pub enum InboundGuidance {
        InboundNotRecommended => "InboundNotRecommended",
        InboundOk => "InboundOK",
    }
}

crate::wire_enum! {
    /// Who preps and labels the shipment.
    pub enum LabelPrepPreference {
        SellerLabel => "SELLER_LABEL",
        AmazonLabelOnly => "AMAZON_LABEL_ONLY",
        AmazonLabelPreferred => "AMAZON_LABEL_PREFERRED",
    }
}

crate::wire_enum! {
    /// How an item must be prepared before inbound shipping.
    pub enum PrepInstruction {
        Polybagging => "Polybagging",
        BubbleWrapping => "BubbleWrapping",
        Taping => "Taping",
        BlackShrinkWrapping => "BlackShrinkWrapping",
        Labeling => "Labeling",
        HangGarment => "HangGarment",
    }
}

crate::wire_enum! {
    /// Who performs the prep.
    pub enum PrepOwner {
        Amazon => "AMAZON",
        Seller => "SELLER",
    }
}

crate::wire_enum! {
    /// Lifecycle state of an inbound shipment set by the seller.
    pub enum ShipmentStatus {
        Working => "WORKING",
        Shipped => "SHIPPED",
        Cancelled => "CANCELLED",
    }
}

crate::wire_enum! {
    /// Condition of an item sent to the fulfillment network.
    pub enum ItemCondition {
        NewItem => "NewItem",
        NewWithWarranty => "NewWithWarranty",
        NewOem => "NewOEM",
        NewOpenBox => "NewOpenBox",
        UsedLikeNew => "UsedLikeNew",
        UsedVeryGood => "UsedVeryGood",
        UsedGood => "UsedGood",
        UsedAcceptable => "UsedAcceptable",
        UsedPoor => "UsedPoor",
        UsedRefurbished => "UsedRefurbished",
        CollectibleLikeNew => "CollectibleLikeNew",
        CollectibleVeryGood => "CollectibleVeryGood",
        CollectibleGood => "CollectibleGood",
        CollectibleAcceptable => "CollectibleAcceptable",
        CollectiblePoor => "CollectiblePoor",
        RefurbishedWithWarranty => "RefurbishedWithWarranty",
        Refurbished => "Refurbished",
        Club => "Club",
    }
}

/// A ship-from or ship-to address for inbound shipments. The same shape is
/// sent in requests and decoded from responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InboundAddress {
    /// Name of the party at the address.
    pub name: String,
    /// First address line.
    pub address_line_1: String,
    /// Second address line.
    pub address_line_2: Option<String>,
    /// City.
    pub city: String,
    /// District or county.
    pub district_or_county: Option<String>,
    /// State or province code.
    pub state_or_province_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// Postal code.
    pub postal_code: Option<String>,
}

/// One prep step and who performs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PrepDetails {
    /// The prep step.
    pub prep_instruction: PrepInstruction,
    /// Who performs it.
    pub prep_owner: PrepOwner,
}

/// One item in a shipment plan request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InboundShipmentPlanRequestItem {
    /// The seller SKU.
    pub seller_sku: String,
    /// The item's ASIN.
    pub asin: Option<String>,
    /// Condition of the item.
    pub condition: Option<ItemCondition>,
    /// Units to ship.
    pub quantity: u32,
    /// Units per case, for case-packed shipments.
    pub quantity_in_case: Option<u32>,
    /// Prep steps for the item.
    pub prep_details_list: Option<Vec<PrepDetails>>,
}

/// Caller-supplied input for `CreateInboundShipmentPlan`.
#[derive(Clone, Debug)]
pub struct CreateInboundShipmentPlanParameters {
    /// Where the shipment originates.
    pub ship_from_address: InboundAddress,
    /// Destination country, when shipping internationally.
    pub ship_to_country_code: Option<String>,
    /// Destination country subdivision.
    pub ship_to_country_subdivision_code: Option<String>,
    /// Who preps and labels.
    pub label_prep_preference: Option<LabelPrepPreference>,
    /// The items to plan.
    pub inbound_shipment_plan_request_items: Vec<InboundShipmentPlanRequestItem>,
}

impl CreateInboundShipmentPlanParameters {
    fn to_parameters(&self) -> Parameters {
        let mut wire = Parameters::new();
        insert_address(&mut wire, "ShipFromAddress", &self.ship_from_address);
        wire.insert_opt("ShipToCountryCode", self.ship_to_country_code.clone());
        wire.insert_opt(
            "ShipToCountrySubdivisionCode",
            self.ship_to_country_subdivision_code.clone(),
        );
        wire.insert_opt(
            "LabelPrepPreference",
            self.label_prep_preference.map(WireEnum::as_wire),
        );
        for (index, item) in self.inbound_shipment_plan_request_items.iter().enumerate() {
            let prefix = format!("InboundShipmentPlanRequestItems.member.{}", index + 1);
            wire.insert(format!("{prefix}.SellerSKU"), &item.seller_sku);
            wire.insert_opt(format!("{prefix}.ASIN"), item.asin.clone());
            wire.insert_opt(
                format!("{prefix}.Condition"),
                item.condition.map(WireEnum::as_wire),
            );
            wire.insert(format!("{prefix}.Quantity"), item.quantity.to_string());
            wire.insert_opt(
                format!("{prefix}.QuantityInCase"),
                item.quantity_in_case.map(|quantity| quantity.to_string()),
            );
            if let Some(prep_details) = &item.prep_details_list {
                insert_prep_details(&mut wire, &prefix, prep_details);
            }
        }
        wire
    }
}

/// Header fields shared by `CreateInboundShipment` and
/// `UpdateInboundShipment`.
#[derive(Clone, Debug)]
pub struct InboundShipmentHeader {
    /// Seller-chosen shipment name.
    pub shipment_name: String,
    /// Where the shipment originates.
    pub ship_from_address: InboundAddress,
    /// Fulfillment center the plan assigned.
    pub destination_fulfillment_center_id: String,
    /// Who preps and labels.
    pub label_prep_preference: LabelPrepPreference,
    /// Working, shipped or cancelled.
    pub shipment_status: ShipmentStatus,
}

/// One item of a created or updated shipment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InboundShipmentItem {
    /// The seller SKU.
    pub seller_sku: String,
    /// Units shipped.
    pub quantity_shipped: u32,
    /// Units per case, for case-packed shipments.
    pub quantity_in_case: Option<u32>,
    /// Prep steps for the item.
    pub prep_details_list: Option<Vec<PrepDetails>>,
}

/// Caller-supplied input for `CreateInboundShipment` and
/// `UpdateInboundShipment`.
#[derive(Clone, Debug)]
pub struct InboundShipmentParameters {
    /// Shipment id returned by the plan.
    pub shipment_id: String,
    /// The shipment header.
    pub inbound_shipment_header: InboundShipmentHeader,
    /// The items in the shipment.
    pub inbound_shipment_items: Vec<InboundShipmentItem>,
}

impl InboundShipmentParameters {
    fn to_parameters(&self) -> Parameters {
        let mut wire = Parameters::new();
        wire.insert("ShipmentId", &self.shipment_id);
        let header = &self.inbound_shipment_header;
        wire.insert("InboundShipmentHeader.ShipmentName", &header.shipment_name);
        insert_address(
            &mut wire,
            "InboundShipmentHeader.ShipFromAddress",
            &header.ship_from_address,
        );
        wire.insert(
            "InboundShipmentHeader.DestinationFulfillmentCenterId",
            &header.destination_fulfillment_center_id,
        );
        wire.insert(
            "InboundShipmentHeader.LabelPrepPreference",
            header.label_prep_preference.as_wire(),
        );
        wire.insert(
            "InboundShipmentHeader.ShipmentStatus",
            header.shipment_status.as_wire(),
        );
        for (index, item) in self.inbound_shipment_items.iter().enumerate() {
            let prefix = format!("InboundShipmentItems.member.{}", index + 1);
            wire.insert(format!("{prefix}.SellerSKU"), &item.seller_sku);
            wire.insert(
                format!("{prefix}.QuantityShipped"),
                item.quantity_shipped.to_string(),
            );
            wire.insert_opt(
                format!("{prefix}.QuantityInCase"),
                item.quantity_in_case.map(|quantity| quantity.to_string()),
            );
            if let Some(prep_details) = &item.prep_details_list {
                insert_prep_details(&mut wire, &prefix, prep_details);
            }
        }
        wire
    }
}

fn insert_address(wire: &mut Parameters, prefix: &str, address: &InboundAddress) {
    wire.insert(format!("{prefix}.Name"), &address.name);
    wire.insert(format!("{prefix}.AddressLine1"), &address.address_line_1);
    wire.insert_opt(
        format!("{prefix}.AddressLine2"),
        address.address_line_2.clone(),
    );
    wire.insert(format!("{prefix}.City"), &address.city);
    wire.insert_opt(
        format!("{prefix}.DistrictOrCounty"),
        address.district_or_county.clone(),
    );
    wire.insert_opt(
        format!("{prefix}.StateOrProvinceCode"),
        address.state_or_province_code.clone(),
    );
    wire.insert(format!("{prefix}.CountryCode"), &address.country_code);
    wire.insert_opt(format!("{prefix}.PostalCode"), address.postal_code.clone());
}

fn insert_prep_details(wire: &mut Parameters, prefix: &str, prep_details: &[PrepDetails]) {
    for (index, prep) in prep_details.iter().enumerate() {
        let prep_prefix = format!("{prefix}.PrepDetailsList.PrepDetails.{}", index + 1);
        wire.insert(
            format!("{prep_prefix}.PrepInstruction"),
            prep.prep_instruction.as_wire(),
        );
        wire.insert(format!("{prep_prefix}.PrepOwner"), prep.prep_owner.as_wire());
    }
}

/// One item of a planned shipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InboundShipmentPlanItem {
    /// The seller SKU.
    pub seller_sku: String,
    /// SKU assigned by the fulfillment network.
    pub fulfillment_network_sku: String,
    /// Units in the plan.
    pub quantity: i64,
    /// Prep steps required for the item.
    pub prep_details_list: Option<Vec<PrepDetails>>,
}

/// A currency amount as text, as the planning endpoints report it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Amount {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// The amount.
    pub value: String,
}

/// Estimated manual-processing fee for a shipment's box contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoxContentsFeeDetails {
    /// Units the fee applies to.
    pub total_units: Option<i64>,
    /// Fee per unit.
    pub fee_per_unit: Option<Amount>,
    /// Total fee.
    pub total_fee: Option<Amount>,
}

/// One shipment the planning service proposes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InboundShipmentPlan {
    /// Identifier to use when creating the shipment.
    pub shipment_id: String,
    /// Fulfillment center the shipment goes to.
    pub destination_fulfillment_center_id: String,
    /// Where to send the shipment.
    pub ship_to_address: InboundAddress,
    /// Label prep assigned by the service.
    pub label_prep_type: String,
    /// The items assigned to this shipment.
    pub items: Vec<InboundShipmentPlanItem>,
    /// Estimated box contents fee, when applicable.
    pub estimated_box_contents_fee: Option<BoxContentsFeeDetails>,
}

/// Decoded result of `CreateInboundShipmentPlan`.
#[derive(Clone, Debug, Serialize)]
pub struct CreateInboundShipmentPlanResult {
    /// The proposed shipments.
    pub inbound_shipment_plans: Vec<InboundShipmentPlan>,
}

/// Decoded result of `CreateInboundShipment` and `UpdateInboundShipment`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InboundShipmentResult {
    /// The shipment acted on.
    pub shipment_id: String,
}

/// Inbound guidance for one seller SKU.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkuInboundGuidance {
    /// The seller SKU.
    pub seller_sku: String,
    /// The item's ASIN.
    pub asin: String,
    /// The guidance for this item.
    pub inbound_guidance: InboundGuidance,
    /// Reasons behind the guidance.
    pub guidance_reason_list: Option<Vec<GuidanceReason>>,
}

/// A submitted SKU that could not be evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvalidSku {
    /// The rejected seller SKU.
    pub seller_sku: String,
    /// Why the SKU was rejected.
    pub error_reason: String,
}

/// Inbound guidance for one ASIN.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AsinInboundGuidance {
    /// The ASIN.
    pub asin: String,
    /// The guidance for this item.
    pub inbound_guidance: InboundGuidance,
    /// Reasons behind the guidance.
    pub guidance_reason_list: Option<Vec<GuidanceReason>>,
}

/// A submitted ASIN that could not be evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InvalidAsin {
    /// The rejected ASIN.
    pub asin: String,
    /// Why the ASIN was rejected.
    pub error_reason: String,
}

/// Decoded result of `GetInboundGuidanceForSKU`.
#[derive(Clone, Debug, Serialize)]
pub struct GetInboundGuidanceForSkuResult {
    /// Guidance per evaluated SKU.
    pub sku_inbound_guidance_list: Vec<SkuInboundGuidance>,
    /// SKUs the service could not evaluate.
    pub invalid_sku_list: Option<Vec<InvalidSku>>,
}

/// Decoded result of `GetInboundGuidanceForASIN`.
#[derive(Clone, Debug, Serialize)]
pub struct GetInboundGuidanceForAsinResult {
    /// Guidance per evaluated ASIN.
    pub asin_inbound_guidance_list: Vec<AsinInboundGuidance>,
    /// ASINs the service could not evaluate.
    pub invalid_asin_list: Vec<InvalidAsin>,
}

fn decode_guidance_reasons(value: &Value) -> DecodeResult<Vec<GuidanceReason>> {
    decode::ensure_array(value, "GuidanceReason", decode::enumeration)
}

fn decode_sku_guidance(value: &Value) -> DecodeResult<SkuInboundGuidance> {
    let object = decode::object(value)?;
    Ok(SkuInboundGuidance {
        seller_sku: decode::field(object, "SellerSKU", decode::ensure_string)?,
        asin: decode::field(object, "ASIN", decode::string)?,
        inbound_guidance: decode::field(object, "InboundGuidance", decode::enumeration)?,
        guidance_reason_list: decode::optional_field(
            object,
            "GuidanceReasonList",
            decode_guidance_reasons,
        )?,
    })
}

fn decode_invalid_sku(value: &Value) -> DecodeResult<InvalidSku> {
    let object = decode::object(value)?;
    Ok(InvalidSku {
        seller_sku: decode::field(object, "SellerSKU", decode::ensure_string)?,
        error_reason: decode::field(object, "ErrorReason", decode::string)?,
    })
}

fn decode_asin_guidance(value: &Value) -> DecodeResult<AsinInboundGuidance> {
    let object = decode::object(value)?;
    Ok(AsinInboundGuidance {
        asin: decode::field(object, "ASIN", decode::string)?,
        inbound_guidance: decode::field(object, "InboundGuidance", decode::enumeration)?,
        guidance_reason_list: decode::optional_field(
            object,
            "GuidanceReasonList",
            decode_guidance_reasons,
        )?,
    })
}

fn decode_invalid_asin(value: &Value) -> DecodeResult<InvalidAsin> {
    let object = decode::object(value)?;
    Ok(InvalidAsin {
        asin: decode::field(object, "ASIN", decode::string)?,
        error_reason: decode::field(object, "ErrorReason", decode::string)?,
    })
}

fn decode_inbound_address(value: &Value) -> DecodeResult<InboundAddress> {
    let object = decode::object(value)?;
    Ok(InboundAddress {
        name: decode::field(object, "Name", decode::string)?,
        address_line_1: decode::field(object, "AddressLine1", decode::ensure_string)?,
        address_line_2: decode::optional_field(object, "AddressLine2", decode::ensure_string)?,
        city: decode::field(object, "City", decode::string)?,
        district_or_county: decode::optional_field(
            object,
            "DistrictOrCounty",
            decode::string,
        )?,
        state_or_province_code: decode::optional_field(
            object,
            "StateOrProvinceCode",
            decode::string,
        )?,
        country_code: decode::field(object, "CountryCode", decode::string)?,
        postal_code: decode::optional_field(object, "PostalCode", decode::ensure_string)?,
    })
}

fn decode_prep_details(value: &Value) -> DecodeResult<PrepDetails> {
    let object = decode::object(value)?;
    Ok(PrepDetails {
        prep_instruction: decode::field(object, "PrepInstruction", decode::enumeration)?,
        prep_owner: decode::field(object, "PrepOwner", decode::enumeration)?,
    })
}

fn decode_plan_item(value: &Value) -> DecodeResult<InboundShipmentPlanItem> {
    let object = decode::object(value)?;
    Ok(InboundShipmentPlanItem {
        seller_sku: decode::field(object, "SellerSKU", decode::ensure_string)?,
        fulfillment_network_sku: decode::field(
            object,
            "FulfillmentNetworkSKU",
            decode::ensure_string,
        )?,
        quantity: decode::field(object, "Quantity", decode::ensure_int)?,
        prep_details_list: decode::optional_field(object, "PrepDetailsList", |list| {
            decode::ensure_array(list, "PrepDetails", decode_prep_details)
        })?,
    })
}

fn decode_amount(value: &Value) -> DecodeResult<Amount> {
    let object = decode::object(value)?;
    Ok(Amount {
        currency_code: decode::field(object, "CurrencyCode", decode::string)?,
        value: decode::field(object, "Value", decode::ensure_string)?,
    })
}

fn decode_box_contents_fee(value: &Value) -> DecodeResult<BoxContentsFeeDetails> {
    let object = decode::object(value)?;
    Ok(BoxContentsFeeDetails {
        total_units: decode::optional_field(object, "TotalUnits", decode::ensure_int)?,
        fee_per_unit: decode::optional_field(object, "FeePerUnit", decode_amount)?,
        total_fee: decode::optional_field(object, "TotalFee", decode_amount)?,
    })
}

fn decode_inbound_shipment_plan(value: &Value) -> DecodeResult<InboundShipmentPlan> {
    let object = decode::object(value)?;
    Ok(InboundShipmentPlan {
        shipment_id: decode::field(object, "ShipmentId", decode::ensure_string)?,
        destination_fulfillment_center_id: decode::field(
            object,
            "DestinationFulfillmentCenterId",
            decode::ensure_string,
        )?,
        ship_to_address: decode::field(object, "ShipToAddress", decode_inbound_address)?,
        label_prep_type: decode::field(object, "LabelPrepType", decode::string)?,
        items: decode::field(object, "Items", |list| {
            decode::ensure_array(list, "member", decode_plan_item)
        })?,
        estimated_box_contents_fee: decode::optional_field(
            object,
            "EstimatedBoxContentsFee",
            decode_box_contents_fee,
        )?,
    })
}

fn decode_plan_result(value: &Value) -> DecodeResult<CreateInboundShipmentPlanResult> {
    let object = decode::object(value)?;
    Ok(CreateInboundShipmentPlanResult {
        inbound_shipment_plans: decode::field(object, "InboundShipmentPlans", |list| {
            decode::ensure_array(list, "member", decode_inbound_shipment_plan)
        })?,
    })
}

fn decode_shipment_id_result(value: &Value) -> DecodeResult<InboundShipmentResult> {
    let object = decode::object(value)?;
    Ok(InboundShipmentResult {
        shipment_id: decode::field(object, "ShipmentId", decode::ensure_string)?,
    })
}

fn decode_sku_guidance_result(value: &Value) -> DecodeResult<GetInboundGuidanceForSkuResult> {
    let object = decode::object(value)?;
    Ok(GetInboundGuidanceForSkuResult {
        sku_inbound_guidance_list: decode::field(object, "SKUInboundGuidanceList", |list| {
            decode::ensure_array(list, "SKUInboundGuidance", decode_sku_guidance)
        })?,
        invalid_sku_list: decode::optional_field(object, "InvalidSKUList", |list| {
            decode::ensure_array(list, "InvalidSKU", decode_invalid_sku)
        })?,
    })
}

fn decode_asin_guidance_result(value: &Value) -> DecodeResult<GetInboundGuidanceForAsinResult> {
    let object = decode::object(value)?;
    Ok(GetInboundGuidanceForAsinResult {
        asin_inbound_guidance_list: decode::field(object, "ASINInboundGuidanceList", |list| {
            decode::ensure_array(list, "ASINInboundGuidance", decode_asin_guidance)
        })?,
        invalid_asin_list: decode::field(object, "InvalidASINList", |list| {
            decode::ensure_array(list, "InvalidASIN", decode_invalid_asin)
        })?,
    })
}

/// Operations of the `FulfillmentInboundShipment` resource.
pub struct FulfillmentInboundShipment<'a> {
    pub(crate) client: &'a HttpClient,
}

impl FulfillmentInboundShipment<'_> {
    /// Plans inbound shipments: assigns items to fulfillment centers and
    /// returns the shipment ids to create against.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn create_inbound_shipment_plan(
        &self,
        parameters: &CreateInboundShipmentPlanParameters,
    ) -> Result<(CreateInboundShipmentPlanResult, RequestMeta), MwsError> {
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::FulfillmentInboundShipment,
                FULFILLMENT_INBOUND_SHIPMENT_API_VERSION,
                "CreateInboundShipmentPlan",
                &parameters.to_parameters(),
            )
            .await?;
        let result = decode_envelope(
            &response,
            "CreateInboundShipmentPlanResponse",
            "CreateInboundShipmentPlanResult",
            decode_plan_result,
        )?;
        Ok((result, meta))
    }

    /// Creates a shipment against a previously planned shipment id.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn create_inbound_shipment(
        &self,
        parameters: &InboundShipmentParameters,
    ) -> Result<(InboundShipmentResult, RequestMeta), MwsError> {
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::FulfillmentInboundShipment,
                FULFILLMENT_INBOUND_SHIPMENT_API_VERSION,
                "CreateInboundShipment",
                &parameters.to_parameters(),
            )
            .await?;
        let result = decode_envelope(
            &response,
            "CreateInboundShipmentResponse",
            "CreateInboundShipmentResult",
            decode_shipment_id_result,
        )?;
        Ok((result, meta))
    }

    /// Updates an existing shipment's header or items.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn update_inbound_shipment(
        &self,
        parameters: &InboundShipmentParameters,
    ) -> Result<(InboundShipmentResult, RequestMeta), MwsError> {
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::FulfillmentInboundShipment,
                FULFILLMENT_INBOUND_SHIPMENT_API_VERSION,
                "UpdateInboundShipment",
                &parameters.to_parameters(),
            )
            .await?;
        let result = decode_envelope(
            &response,
            "UpdateInboundShipmentResponse",
            "UpdateInboundShipmentResult",
            decode_shipment_id_result,
        )?;
        Ok((result, meta))
    }

    /// Evaluates inbound guidance for up to 50 seller SKUs in a
    /// marketplace.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn get_inbound_guidance_for_sku(
        &self,
        seller_sku_list: &[String],
        marketplace_id: &str,
    ) -> Result<(GetInboundGuidanceForSkuResult, RequestMeta), MwsError> {
        let mut parameters = Parameters::new();
        parameters.insert_list("SellerSKUList.Id", seller_sku_list.to_vec());
        parameters.insert("MarketplaceId", marketplace_id);
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::FulfillmentInboundShipment,
                FULFILLMENT_INBOUND_SHIPMENT_API_VERSION,
                "GetInboundGuidanceForSKU",
                &parameters,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "GetInboundGuidanceForSKUResponse",
            "GetInboundGuidanceForSKUResult",
            decode_sku_guidance_result,
        )?;
        Ok((result, meta))
    }

    /// Evaluates inbound guidance for up to 50 ASINs in a marketplace.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn get_inbound_guidance_for_asin(
        &self,
        asin_list: &[String],
        marketplace_id: &str,
    ) -> Result<(GetInboundGuidanceForAsinResult, RequestMeta), MwsError> {
        let mut parameters = Parameters::new();
        parameters.insert_list("ASINList.Id", asin_list.to_vec());
        parameters.insert("MarketplaceId", marketplace_id);
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::FulfillmentInboundShipment,
                FULFILLMENT_INBOUND_SHIPMENT_API_VERSION,
                "GetInboundGuidanceForASIN",
                &parameters,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "GetInboundGuidanceForASINResponse",
            "GetInboundGuidanceForASINResult",
            decode_asin_guidance_result,
        )?;
        Ok((result, meta))
    }

    /// Reports the operational status of the FulfillmentInboundShipment
    /// API.
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
            Resource::FulfillmentInboundShipment,
            FULFILLMENT_INBOUND_SHIPMENT_API_VERSION,
        )
        .await
    }
}
