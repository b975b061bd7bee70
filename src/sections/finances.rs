//! The Finances section: financial event groups and events.
//!
//! The event surface carries several documented upstream quirks verbatim:
//! hyphenated `ChargeType` literals, a free-text `FeeType` (live samples
//! include literals absent from the documentation), the camelCase
//! `ProductAdsPaymentEvent` fields, a `TransactionType` that has been
//! observed both capitalized and lowercased, and an
//! `AffordabilityExpenseReversalEventList` whose member element name
//! differs between documented and observed payloads.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::client::{HttpClient, HttpMethod, Parameters, RequestMeta, Resource};
use crate::decode::{self, DecodeResult, NextToken};
use crate::error::MwsError;
use crate::sections::orders::FulfillmentChannel;
use crate::sections::shared::{
    decode_envelope, get_service_status_by_resource, iso8601, ServiceStatusResult,
};

const FINANCES_API_VERSION: &str = "2015-05-01";

crate::wire_enum! {
    /// Settlement state of a financial event group.
    pub enum ProcessingStatus {
        Open => "Open",
        Closed => "Closed",
    }
}

crate::wire_enum! {
    /// The kind of a charge component. Several literals are hyphenated on
    /// the wire.
    pub enum ChargeType {
        Principal => "Principal",
        Tax => "Tax",
        MarketplaceFacilitatorTaxPrincipal => "MarketplaceFacilitatorTax-Principal",
        MarketplaceFacilitatorTaxShipping => "MarketplaceFacilitatorTax-Shipping",
        MarketplaceFacilitatorTaxGiftWrap => "MarketplaceFacilitatorTax-GiftWrap",
        MarketplaceFacilitatorTaxOther => "MarketplaceFacilitatorTax-Other",
        Discount => "Discount",
        TaxDiscount => "TaxDiscount",
        CodItemCharge => "CODItemCharge",
        CodItemTaxCharge => "CODItemTaxCharge",
        CodOrderCharge => "CODOrderCharge",
        CodOrderTaxCharge => "CODOrderTaxCharge",
        CodShippingCharge => "CODShippingCharge",
        CodShippingTaxCharge => "CODShippingTaxCharge",
        ShippingCharge => "ShippingCharge",
        ShippingTax => "ShippingTax",
        Goodwill => "Goodwill",
        GiftWrap => "GiftWrap",
        GiftWrapTax => "GiftWrapTax",
        RestockingFee => "RestockingFee",
        ReturnShipping => "ReturnShipping",
        PointsFee => "PointsFee",
        GenericDeduction => "GenericDeduction",
        FreeReplacementReturnShipping => "FreeReplacementReturnShipping",
        PaymentMethodFee => "PaymentMethodFee",
        ExportCharge => "ExportCharge",
        SafeTReimbursement => "SAFE-TReimbursement",
        TcsCgst => "TCS-CGST",
        TcsSgst => "TCS-SGST",
        TcsIgst => "TCS-IGST",
        TcsUtgst => "TCS-UTGST",
    }
}

crate::wire_enum! {
    /// The kind of a direct payment.
    pub enum DirectPaymentType {
        StoredValueCardRevenue => "StoredValueCardRevenue",
        StoredValueCardRefund => "StoredValueCardRefund",
        PrivateLabelCreditCardRevenue => "PrivateLabelCreditCardRevenue",
        PrivateLabelCreditCardRefund => "PrivateLabelCreditCardRefund",
        CollectOnDeliveryRevenue => "CollectOnDeliveryRevenue",
        CollectOnDeliveryRefund => "CollectOnDeliveryRefund",
    }
}

crate::wire_enum! {
    /// Who withheld the tax.
    pub enum TaxCollectionModel {
        MarketplaceFacilitator => "MarketplaceFacilitator",
        Standard => "Standard",
    }
}

crate::wire_enum! {
    /// Direction of an advertising or affordability transaction. Sample
    /// payloads capitalize these while the documentation lowercases them,
    /// so both casings are accepted.
    pub enum TransactionType {
        LowerCharge => "charge",
        LowerRefund => "refund",
        Charge => "Charge",
        Refund => "Refund",
    }
}

crate::wire_enum! {
    /// Whether a retrocharge was levied or reversed.
    pub enum RetrochargeEventType {
        Retrocharge => "Retrocharge",
        RetrochargeReversal => "RetrochargeReversal",
    }
}

crate::wire_enum! {
    /// The kind of a debt recovery event.
    pub enum DebtRecoveryType {
        DebtPayment => "DebtPayment",
        DebtPaymentFailure => "DebtPaymentFailure",
        DebtAdjustment => "DebtAdjustment",
    }
}

crate::wire_enum! {
    /// The kind of an adjustment. The literal casing is inconsistent on the
    /// wire; underscored and upper-case forms appear in live payloads.
    pub enum AdjustmentType {
        FbaInventoryReimbursement => "FBAInventoryReimbursement",
        ReserveEvent => "ReserveEvent",
        PostageBilling => "PostageBilling",
        PostageBillingTransactionFee => "PostageBilling_TransactionFee",
        PostageBillingInsurance => "PostageBilling_Insurance",
        PostageBillingDeliveryConfirmation => "PostageBilling_DeliveryConfirmation",
        PostageBillingPostage => "PostageBilling_Postage",
        PostageRefund => "PostageRefund",
        LostOrDamagedReimbursement => "LostOrDamagedReimbursement",
        CanceledButPickedUpReimbursement => "CanceledButPickedUpReimbursement",
        ReimbursementClawback => "ReimbursementClawback",
        ReversalReimbursement => "REVERSAL_REIMBURSEMENT",
        SellerRewards => "SellerRewards",
        WarehouseDamage => "WAREHOUSE_DAMAGE",
    }
}

/// A monetary amount with its currency.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CurrencyAmount {
    /// ISO 4217 currency code.
    pub currency_code: Option<String>,
    /// The amount.
    pub currency_amount: Option<f64>,
}

/// A fee charged to the seller. `fee_type` is deliberately free text: live
/// payloads carry literals the documentation omits.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeeComponent {
    /// The kind of fee.
    pub fee_type: Option<String>,
    /// The fee amount.
    pub fee_amount: Option<CurrencyAmount>,
}

/// A charge on the buyer or seller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChargeComponent {
    /// The kind of charge.
    pub charge_type: Option<ChargeType>,
    /// The charge amount.
    pub charge_amount: Option<CurrencyAmount>,
}

/// A payment made directly, outside the normal order flow.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectPayment {
    /// The kind of direct payment.
    pub direct_payment_type: Option<DirectPaymentType>,
    /// The payment amount.
    pub direct_payment_amount: Option<CurrencyAmount>,
}

/// Tax withheld on a charge, and under which collection model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaxWithheldComponent {
    /// Who withheld the tax.
    pub tax_collection_model: Option<TaxCollectionModel>,
    /// The withheld charges.
    pub taxes_withheld: Option<Vec<ChargeComponent>>,
}

/// A promotion applied to a shipment item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Promotion {
    /// The kind of promotion.
    pub promotion_type: Option<String>,
    /// Seller-defined promotion id.
    pub promotion_id: Option<String>,
    /// The promotion amount.
    pub promotion_amount: Option<CurrencyAmount>,
}

/// Charges, fees and promotions for one item of a shipment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShipmentItem {
    /// Seller SKU of the item.
    pub seller_sku: Option<String>,
    /// Order item id.
    pub order_item_id: Option<String>,
    /// Order adjustment item id, for adjustments.
    pub order_adjustment_item_id: Option<String>,
    /// Quantity shipped.
    pub quantity_shipped: Option<i64>,
    /// Charges on the item.
    pub item_charge_list: Option<Vec<ChargeComponent>>,
    /// Taxes withheld on the item.
    pub item_tax_withheld_list: Option<Vec<TaxWithheldComponent>>,
    /// Charge adjustments on the item.
    pub item_charge_adjustment_list: Option<Vec<ChargeComponent>>,
    /// Fees on the item.
    pub item_fee_list: Option<Vec<FeeComponent>>,
    /// Fee adjustments on the item.
    pub item_fee_adjustment_list: Option<Vec<FeeComponent>>,
    /// Promotions on the item.
    pub promotion_list: Option<Vec<Promotion>>,
    /// Promotion adjustments on the item.
    pub promotion_adjustment_list: Option<Vec<Promotion>>,
    /// Cost of Amazon Points granted.
    pub cost_of_points_granted: Option<CurrencyAmount>,
    /// Cost of Amazon Points returned.
    pub cost_of_points_returned: Option<CurrencyAmount>,
}

/// A shipment, refund, guarantee-claim or chargeback event. The four share
/// one shape on the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShipmentEvent {
    /// Amazon-defined order id.
    pub amazon_order_id: Option<String>,
    /// Seller-defined order id.
    pub seller_order_id: Option<String>,
    /// Name of the marketplace.
    pub marketplace_name: Option<String>,
    /// Order-level charges.
    pub order_charge_list: Option<Vec<ChargeComponent>>,
    /// Order-level charge adjustments.
    pub order_charge_adjustment_list: Option<Vec<ChargeComponent>>,
    /// Shipment-level fees.
    pub shipment_fee_list: Option<Vec<FeeComponent>>,
    /// Shipment-level fee adjustments.
    pub shipment_fee_adjustment_list: Option<Vec<FeeComponent>>,
    /// Order-level fees.
    pub order_fee_list: Option<Vec<FeeComponent>>,
    /// Order-level fee adjustments.
    pub order_fee_adjustment_list: Option<Vec<FeeComponent>>,
    /// Direct payments tied to the shipment.
    pub direct_payment_list: Option<Vec<DirectPayment>>,
    /// When the event was posted.
    pub posted_date: Option<DateTime<Utc>>,
    /// Items in the shipment.
    pub shipment_item_list: Option<Vec<ShipmentItem>>,
    /// Item adjustments in the shipment.
    pub shipment_item_adjustment_list: Option<Vec<ShipmentItem>>,
}

/// A payment processed through Amazon Pay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PayWithAmazonEvent {
    /// Seller-defined order id.
    pub seller_order_id: Option<String>,
    /// When the transaction was posted.
    pub transaction_posted_date: Option<DateTime<Utc>>,
    /// The kind of business object.
    pub business_object_type: Option<String>,
    /// Sales channel of the transaction.
    pub sales_channel: Option<String>,
    /// The charge.
    pub charge: Option<ChargeComponent>,
    /// Fees on the transaction.
    pub fee_list: Option<Vec<FeeComponent>>,
    /// The kind of payment amount.
    pub payment_amount_type: Option<String>,
    /// Description of the amount.
    pub amount_description: Option<String>,
    /// Fulfillment channel.
    pub fulfillment_channel: Option<FulfillmentChannel>,
    /// Store name of the transaction.
    pub store_name: Option<String>,
}

/// A payment event for Sponsored Products advertising. The service emits
/// these fields in camelCase, unlike every other event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductAdsPaymentEvent {
    /// When the event was posted.
    pub posted_date: Option<DateTime<Utc>>,
    /// Charge or refund.
    pub transaction_type: Option<TransactionType>,
    /// Invoice the event belongs to.
    pub invoice_id: Option<String>,
    /// Amount before tax.
    pub base_value: Option<CurrencyAmount>,
    /// Tax on the base amount.
    pub tax_value: Option<CurrencyAmount>,
    /// Total transaction amount.
    pub transaction_value: Option<CurrencyAmount>,
}

/// A fee charged for a service the seller used.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceFeeEvent {
    /// Amazon-defined order id.
    pub amazon_order_id: Option<String>,
    /// Reason the fee was charged.
    pub fee_reason: Option<String>,
    /// The fees charged.
    pub fee_list: Option<Vec<FeeComponent>>,
    /// Seller SKU of the item.
    pub seller_sku: Option<String>,
    /// Fulfillment network SKU of the item.
    pub fn_sku: Option<String>,
    /// Description of the fee. (`FeeDesription` is the wire spelling.)
    pub fee_description: Option<String>,
    /// ASIN of the item.
    pub asin: Option<String>,
}

/// An expense related to an affordability promotion.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AffordabilityExpenseEvent {
    /// When the event was posted.
    pub posted_date: Option<DateTime<Utc>>,
    /// Charge or refund.
    pub transaction_type: Option<TransactionType>,
    /// Amazon-defined order id.
    pub amazon_order_id: Option<String>,
    /// Amount before tax.
    pub base_expense: Option<CurrencyAmount>,
    /// Total expense.
    pub total_expense: Option<CurrencyAmount>,
    /// IGST tax portion.
    pub tax_type_igst: Option<CurrencyAmount>,
    /// CGST tax portion.
    pub tax_type_cgst: Option<CurrencyAmount>,
    /// SGST tax portion.
    pub tax_type_sgst: Option<CurrencyAmount>,
    /// Marketplace the expense was incurred in.
    pub marketplace_id: Option<String>,
}

/// A tax charged or reversed after the original order settled.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RetrochargeEvent {
    /// Retrocharge or its reversal.
    pub retrocharge_event_type: Option<RetrochargeEventType>,
    /// Amazon-defined order id.
    pub amazon_order_id: Option<String>,
    /// When the event was posted.
    pub posted_date: Option<DateTime<Utc>>,
    /// Tax on the base amount.
    pub base_tax: Option<CurrencyAmount>,
    /// Tax on the shipping amount.
    pub shipping_tax: Option<CurrencyAmount>,
    /// Name of the marketplace.
    pub marketplace_name: Option<String>,
    /// Taxes withheld on the retrocharge.
    pub retrocharge_tax_withheld_component_list: Option<Vec<TaxWithheldComponent>>,
}

/// One recovered debt within a debt recovery event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DebtRecoveryItem {
    /// Amount recovered by this item.
    pub recovery_amount: Option<CurrencyAmount>,
    /// The original debt.
    pub original_amount: Option<CurrencyAmount>,
    /// Start of the settlement range the debt belongs to.
    pub group_begin_date: Option<DateTime<Utc>>,
    /// End of the settlement range the debt belongs to.
    pub group_end_date: Option<DateTime<Utc>>,
}

/// A payment instrument a debt was charged against.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChargeInstrument {
    /// Description of the instrument.
    pub description: Option<String>,
    /// Last digits of the instrument's account number.
    pub tail: Option<String>,
    /// Amount charged against it.
    pub amount: Option<CurrencyAmount>,
}

/// A debt the service recovered from the seller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DebtRecoveryEvent {
    /// The kind of recovery.
    pub debt_recovery_type: Option<DebtRecoveryType>,
    /// Total amount recovered.
    pub recovery_amount: Option<CurrencyAmount>,
    /// Credit for overpayment, if any.
    pub over_payment_credit: Option<CurrencyAmount>,
    /// The individual debts recovered.
    pub debt_recovery_item_list: Option<Vec<DebtRecoveryItem>>,
    /// The instruments the debts were charged against.
    pub charge_instrument_list: Option<Vec<ChargeInstrument>>,
}

/// One item within an adjustment event. `quantity` is text on the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdjustmentItem {
    /// Quantity adjusted.
    pub quantity: Option<String>,
    /// Amount per unit.
    pub per_unit_amount: Option<CurrencyAmount>,
    /// Total amount for the item.
    pub total_amount: Option<CurrencyAmount>,
    /// Seller SKU of the item.
    pub seller_sku: Option<String>,
    /// Fulfillment network SKU of the item.
    pub fn_sku: Option<String>,
    /// Description of the product.
    pub product_description: Option<String>,
    /// ASIN of the item.
    pub asin: Option<String>,
}

/// A balance adjustment to the seller's account.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdjustmentEvent {
    /// The kind of adjustment.
    pub adjustment_type: Option<AdjustmentType>,
    /// Total adjustment amount.
    pub adjustment_amount: Option<CurrencyAmount>,
    /// The items adjusted.
    pub adjustment_item_list: Option<Vec<AdjustmentItem>>,
    /// When the event was posted.
    pub posted_date: Option<DateTime<Utc>>,
}

/// A payment event for a coupon the seller ran.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CouponPaymentEvent {
    /// When the event was posted.
    pub posted_date: Option<DateTime<Utc>>,
    /// Identifier of the coupon.
    pub coupon_id: Option<String>,
    /// Seller-supplied coupon description.
    pub seller_coupon_description: Option<String>,
    /// How many times the coupon was clipped or redeemed.
    pub clip_or_redemption_count: Option<i64>,
    /// Identifier of the payment event.
    pub payment_event_id: Option<String>,
    /// The redemption fee.
    pub fee_component: Option<FeeComponent>,
    /// The charge for the redemptions.
    pub charge_component: Option<ChargeComponent>,
    /// Total amount of the event.
    pub total_amount: Option<CurrencyAmount>,
}

/// The charges reimbursed by one SAFE-T claim item.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SafetReimbursementItem {
    /// Charges covered by the reimbursement.
    pub item_charge_list: Option<Vec<ChargeComponent>>,
}

/// A reimbursement granted through the SAFE-T claims process.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SafetReimbursementEvent {
    /// When the event was posted.
    pub posted_date: Option<DateTime<Utc>>,
    /// Identifier of the SAFE-T claim.
    pub safet_claim_id: Option<String>,
    /// Amount reimbursed.
    pub reimbursed_amount: Option<CurrencyAmount>,
    /// The reimbursed items.
    pub safet_reimbursement_item_list: Option<Vec<SafetReimbursementItem>>,
}

/// A group of financial events settled together.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FinancialEventGroup {
    /// Group identifier.
    pub financial_event_group_id: Option<String>,
    /// Open or closed.
    pub processing_status: Option<ProcessingStatus>,
    /// Status of the fund transfer.
    pub fund_transfer_status: Option<String>,
    /// Total in the original currency.
    pub original_total: Option<CurrencyAmount>,
    /// Total converted to the seller's currency.
    pub converted_total: Option<CurrencyAmount>,
    /// When the funds were transferred.
    pub fund_transfer_date: Option<DateTime<Utc>>,
    /// Trace id of the transfer.
    pub trace_id: Option<String>,
    /// Last digits of the receiving account.
    pub account_tail: Option<String>,
    /// Balance at the start of the group.
    pub beginning_balance: Option<CurrencyAmount>,
    /// When the group opened.
    pub financial_event_group_start: Option<DateTime<Utc>>,
    /// When the group closed.
    pub financial_event_group_end: Option<DateTime<Utc>>,
}

/// The financial events of one listing page, grouped by kind.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FinancialEvents {
    /// Shipment events.
    pub shipment_event_list: Option<Vec<ShipmentEvent>>,
    /// Refund events; same shape as shipment events.
    pub refund_event_list: Option<Vec<ShipmentEvent>>,
    /// Guarantee-claim events; same shape as shipment events.
    pub guarantee_claim_event_list: Option<Vec<ShipmentEvent>>,
    /// Chargeback events; same shape as shipment events.
    pub chargeback_event_list: Option<Vec<ShipmentEvent>>,
    /// Amazon Pay events.
    pub pay_with_amazon_event_list: Option<Vec<PayWithAmazonEvent>>,
    /// Retrocharge and retrocharge reversal events.
    pub retrocharge_event_list: Option<Vec<RetrochargeEvent>>,
    /// Sponsored Products advertising events.
    pub product_ads_payment_event_list: Option<Vec<ProductAdsPaymentEvent>>,
    /// Service fee events.
    pub service_fee_event_list: Option<Vec<ServiceFeeEvent>>,
    /// Debt recovery events.
    pub debt_recovery_event_list: Option<Vec<DebtRecoveryEvent>>,
    /// Balance adjustment events.
    pub adjustment_event_list: Option<Vec<AdjustmentEvent>>,
    /// Coupon payment events.
    pub coupon_payment_event_list: Option<Vec<CouponPaymentEvent>>,
    /// SAFE-T reimbursement events.
    pub safet_reimbursement_event_list: Option<Vec<SafetReimbursementEvent>>,
    /// Affordability expense events.
    pub affordability_expense_event_list: Option<Vec<AffordabilityExpenseEvent>>,
    /// Affordability expense reversal events.
    pub affordability_expense_reversal_event_list: Option<Vec<AffordabilityExpenseEvent>>,
}

/// Decoded result of `ListFinancialEventGroups` (and its continuation).
#[derive(Clone, Debug, Serialize)]
pub struct ListFinancialEventGroupsResult {
    /// Continuation token for the next page, when more data exists.
    pub next_token: Option<NextToken>,
    /// The event groups on this page.
    pub financial_event_group_list: Vec<FinancialEventGroup>,
}

/// Decoded result of `ListFinancialEvents` (and its continuation).
#[derive(Clone, Debug, Serialize)]
pub struct ListFinancialEventsResult {
    /// Continuation token for the next page, when more data exists.
    pub next_token: Option<NextToken>,
    /// The events on this page.
    pub financial_events: FinancialEvents,
}

/// Caller-supplied filters for `ListFinancialEventGroups`.
#[derive(Clone, Debug)]
pub struct ListFinancialEventGroupsParameters {
    /// Only groups that opened after this instant. Required.
    pub financial_event_group_started_after: DateTime<Utc>,
    /// Only groups that opened before this instant.
    pub financial_event_group_started_before: Option<DateTime<Utc>>,
    /// Page size cap.
    pub max_results_per_page: Option<u16>,
}

/// Caller-supplied filters for `ListFinancialEvents`.
///
/// Exactly one of `amazon_order_id`, `financial_event_group_id` or
/// `posted_after` selects the events; the service rejects ambiguous
/// combinations.
#[derive(Clone, Debug, Default)]
pub struct ListFinancialEventsParameters {
    /// Events for this order.
    pub amazon_order_id: Option<String>,
    /// Events in this group.
    pub financial_event_group_id: Option<String>,
    /// Events posted after this instant.
    pub posted_after: Option<DateTime<Utc>>,
    /// Events posted before this instant.
    pub posted_before: Option<DateTime<Utc>>,
    /// Page size cap.
    pub max_results_per_page: Option<u16>,
}

fn decode_currency_amount(value: &Value) -> DecodeResult<CurrencyAmount> {
    let object = decode::object(value)?;
    Ok(CurrencyAmount {
        currency_code: decode::optional_field(object, "CurrencyCode", decode::string)?,
        currency_amount: decode::optional_field(object, "CurrencyAmount", decode::number)?,
    })
}

fn decode_fee_component(value: &Value) -> DecodeResult<FeeComponent> {
    let object = decode::object(value)?;
    Ok(FeeComponent {
        fee_type: decode::optional_field(object, "FeeType", decode::string)?,
        fee_amount: decode::optional_field(object, "FeeAmount", decode_currency_amount)?,
    })
}

fn decode_charge_component(value: &Value) -> DecodeResult<ChargeComponent> {
    let object = decode::object(value)?;
    Ok(ChargeComponent {
        charge_type: decode::optional_field(object, "ChargeType", decode::enumeration)?,
        charge_amount: decode::optional_field(object, "ChargeAmount", decode_currency_amount)?,
    })
}

fn decode_direct_payment(value: &Value) -> DecodeResult<DirectPayment> {
    let object = decode::object(value)?;
    Ok(DirectPayment {
        direct_payment_type: decode::optional_field(
            object,
            "DirectPaymentType",
            decode::enumeration,
        )?,
        direct_payment_amount: decode::optional_field(
            object,
            "DirectPaymentAmount",
            decode_currency_amount,
        )?,
    })
}

fn decode_tax_withheld_component(value: &Value) -> DecodeResult<TaxWithheldComponent> {
    let object = decode::object(value)?;
    Ok(TaxWithheldComponent {
        tax_collection_model: decode::optional_field(
            object,
            "TaxCollectionModel",
            decode::enumeration,
        )?,
        taxes_withheld: decode::optional_field(object, "TaxesWithheld", |list| {
            decode::ensure_array(list, "ChargeComponent", decode_charge_component)
        })?,
    })
}

fn decode_promotion(value: &Value) -> DecodeResult<Promotion> {
    let object = decode::object(value)?;
    Ok(Promotion {
        promotion_type: decode::optional_field(object, "PromotionType", decode::string)?,
        promotion_id: decode::optional_field(object, "PromotionId", decode::ensure_string)?,
        promotion_amount: decode::optional_field(
            object,
            "PromotionAmount",
            decode_currency_amount,
        )?,
    })
}

fn decode_shipment_item(value: &Value) -> DecodeResult<ShipmentItem> {
    let object = decode::object(value)?;
    let charges = |list: &Value| decode::ensure_array(list, "ChargeComponent", decode_charge_component);
    let fees = |list: &Value| decode::ensure_array(list, "FeeComponent", decode_fee_component);
    let promotions = |list: &Value| decode::ensure_array(list, "Promotion", decode_promotion);
    Ok(ShipmentItem {
        seller_sku: decode::optional_field(object, "SellerSKU", decode::ensure_string)?,
        order_item_id: decode::optional_field(object, "OrderItemId", decode::ensure_string)?,
        order_adjustment_item_id: decode::optional_field(
            object,
            "OrderAdjustmentItemId",
            decode::ensure_string,
        )?,
        quantity_shipped: decode::optional_field(object, "QuantityShipped", decode::ensure_int)?,
        item_charge_list: decode::optional_field(object, "ItemChargeList", charges)?,
        item_tax_withheld_list: decode::optional_field(object, "ItemTaxWithheldList", |list| {
            decode::ensure_array(list, "TaxWithheldComponent", decode_tax_withheld_component)
        })?,
        item_charge_adjustment_list: decode::optional_field(
            object,
            "ItemChargeAdjustmentList",
            charges,
        )?,
        item_fee_list: decode::optional_field(object, "ItemFeeList", fees)?,
        item_fee_adjustment_list: decode::optional_field(object, "ItemFeeAdjustmentList", fees)?,
        promotion_list: decode::optional_field(object, "PromotionList", promotions)?,
        promotion_adjustment_list: decode::optional_field(
            object,
            "PromotionAdjustmentList",
            promotions,
        )?,
        cost_of_points_granted: decode::optional_field(
            object,
            "CostOfPointsGranted",
            decode_currency_amount,
        )?,
        cost_of_points_returned: decode::optional_field(
            object,
            "CostOfPointsReturned",
            decode_currency_amount,
        )?,
    })
}

fn decode_shipment_event(value: &Value) -> DecodeResult<ShipmentEvent> {
    let object = decode::object(value)?;
    let charges = |list: &Value| decode::ensure_array(list, "ChargeComponent", decode_charge_component);
    let fees = |list: &Value| decode::ensure_array(list, "FeeComponent", decode_fee_component);
    let items = |list: &Value| decode::ensure_array(list, "ShipmentItem", decode_shipment_item);
    Ok(ShipmentEvent {
        amazon_order_id: decode::optional_field(object, "AmazonOrderId", decode::ensure_string)?,
        seller_order_id: decode::optional_field(object, "SellerOrderId", decode::ensure_string)?,
        marketplace_name: decode::optional_field(object, "MarketplaceName", decode::string)?,
        order_charge_list: decode::optional_field(object, "OrderChargeList", charges)?,
        order_charge_adjustment_list: decode::optional_field(
            object,
            "OrderChargeAdjustmentList",
            charges,
        )?,
        shipment_fee_list: decode::optional_field(object, "ShipmentFeeList", fees)?,
        shipment_fee_adjustment_list: decode::optional_field(
            object,
            "ShipmentFeeAdjustmentList",
            fees,
        )?,
        order_fee_list: decode::optional_field(object, "OrderFeeList", fees)?,
        order_fee_adjustment_list: decode::optional_field(object, "OrderFeeAdjustmentList", fees)?,
        direct_payment_list: decode::optional_field(object, "DirectPaymentList", |list| {
            decode::ensure_array(list, "DirectPayment", decode_direct_payment)
        })?,
        posted_date: decode::optional_field(object, "PostedDate", decode::datetime)?,
        shipment_item_list: decode::optional_field(object, "ShipmentItemList", items)?,
        shipment_item_adjustment_list: decode::optional_field(
            object,
            "ShipmentItemAdjustmentList",
            items,
        )?,
    })
}

fn decode_pay_with_amazon_event(value: &Value) -> DecodeResult<PayWithAmazonEvent> {
    let object = decode::object(value)?;
    Ok(PayWithAmazonEvent {
        seller_order_id: decode::optional_field(object, "SellerOrderId", decode::ensure_string)?,
        transaction_posted_date: decode::optional_field(
            object,
            "TransactionPostedDate",
            decode::datetime,
        )?,
        business_object_type: decode::optional_field(object, "BusinessObjectType", decode::string)?,
        sales_channel: decode::optional_field(object, "SalesChannel", decode::string)?,
        charge: decode::optional_field(object, "Charge", decode_charge_component)?,
        fee_list: decode::optional_field(object, "FeeList", |list| {
            decode::ensure_array(list, "FeeComponent", decode_fee_component)
        })?,
        payment_amount_type: decode::optional_field(object, "PaymentAmountType", decode::string)?,
        amount_description: decode::optional_field(object, "AmountDescription", decode::string)?,
        fulfillment_channel: decode::optional_field(
            object,
            "FulfillmentChannel",
            decode::enumeration,
        )?,
        store_name: decode::optional_field(object, "StoreName", decode::string)?,
    })
}

fn decode_product_ads_payment_event(value: &Value) -> DecodeResult<ProductAdsPaymentEvent> {
    let object = decode::object(value)?;
    Ok(ProductAdsPaymentEvent {
        posted_date: decode::optional_field(object, "postedDate", decode::datetime)?,
        transaction_type: decode::optional_field(object, "transactionType", decode::enumeration)?,
        invoice_id: decode::optional_field(object, "invoiceId", decode::ensure_string)?,
        base_value: decode::optional_field(object, "baseValue", decode_currency_amount)?,
        tax_value: decode::optional_field(object, "taxValue", decode_currency_amount)?,
        transaction_value: decode::optional_field(
            object,
            "transactionValue",
            decode_currency_amount,
        )?,
    })
}

fn decode_service_fee_event(value: &Value) -> DecodeResult<ServiceFeeEvent> {
    let object = decode::object(value)?;
    Ok(ServiceFeeEvent {
        amazon_order_id: decode::optional_field(object, "AmazonOrderId", decode::ensure_string)?,
        fee_reason: decode::optional_field(object, "FeeReason", decode::string)?,
        fee_list: decode::optional_field(object, "FeeList", |list| {
            decode::ensure_array(list, "FeeComponent", decode_fee_component)
        })?,
        seller_sku: decode::optional_field(object, "SellerSKU", decode::ensure_string)?,
        fn_sku: decode::optional_field(object, "FnSKU", decode::ensure_string)?,
        fee_description: decode::optional_field(object, "FeeDesription", decode::string)?,
        asin: decode::optional_field(object, "ASIN", decode::string)?,
    })
}

fn decode_affordability_expense_event(value: &Value) -> DecodeResult<AffordabilityExpenseEvent> {
    let object = decode::object(value)?;
    Ok(AffordabilityExpenseEvent {
        posted_date: decode::optional_field(object, "PostedDate", decode::datetime)?,
        transaction_type: decode::optional_field(object, "TransactionType", decode::enumeration)?,
        amazon_order_id: decode::optional_field(object, "AmazonOrderId", decode::ensure_string)?,
        base_expense: decode::optional_field(object, "BaseExpense", decode_currency_amount)?,
        total_expense: decode::optional_field(object, "TotalExpense", decode_currency_amount)?,
        tax_type_igst: decode::optional_field(object, "TaxTypeIGST", decode_currency_amount)?,
        tax_type_cgst: decode::optional_field(object, "TaxTypeCGST", decode_currency_amount)?,
        tax_type_sgst: decode::optional_field(object, "TaxTypeSGST", decode_currency_amount)?,
        marketplace_id: decode::optional_field(object, "MarketplaceId", decode::string)?,
    })
}

fn decode_retrocharge_event(value: &Value) -> DecodeResult<RetrochargeEvent> {
    let object = decode::object(value)?;
    Ok(RetrochargeEvent {
        retrocharge_event_type: decode::optional_field(
            object,
            "RetrochargeEventType",
            decode::enumeration,
        )?,
        amazon_order_id: decode::optional_field(object, "AmazonOrderId", decode::ensure_string)?,
        posted_date: decode::optional_field(object, "PostedDate", decode::datetime)?,
        base_tax: decode::optional_field(object, "BaseTax", decode_currency_amount)?,
        shipping_tax: decode::optional_field(object, "ShippingTax", decode_currency_amount)?,
        marketplace_name: decode::optional_field(object, "MarketplaceName", decode::string)?,
        retrocharge_tax_withheld_component_list: decode::optional_field(
            object,
            "RetrochargeTaxWithheldComponentList",
            |list| {
                decode::ensure_array(list, "TaxWithheldComponent", decode_tax_withheld_component)
            },
        )?,
    })
}

fn decode_debt_recovery_item(value: &Value) -> DecodeResult<DebtRecoveryItem> {
    let object = decode::object(value)?;
    Ok(DebtRecoveryItem {
        recovery_amount: decode::optional_field(object, "RecoveryAmount", decode_currency_amount)?,
        original_amount: decode::optional_field(object, "OriginalAmount", decode_currency_amount)?,
        group_begin_date: decode::optional_field(object, "GroupBeginDate", decode::datetime)?,
        group_end_date: decode::optional_field(object, "GroupEndDate", decode::datetime)?,
    })
}

fn decode_charge_instrument(value: &Value) -> DecodeResult<ChargeInstrument> {
    let object = decode::object(value)?;
    Ok(ChargeInstrument {
        description: decode::optional_field(object, "Description", decode::string)?,
        tail: decode::optional_field(object, "Tail", decode::ensure_string)?,
        amount: decode::optional_field(object, "Amount", decode_currency_amount)?,
    })
}

fn decode_debt_recovery_event(value: &Value) -> DecodeResult<DebtRecoveryEvent> {
    let object = decode::object(value)?;
    Ok(DebtRecoveryEvent {
        debt_recovery_type: decode::optional_field(
            object,
            "DebtRecoveryType",
            decode::enumeration,
        )?,
        recovery_amount: decode::optional_field(object, "RecoveryAmount", decode_currency_amount)?,
        over_payment_credit: decode::optional_field(
            object,
            "OverPaymentCredit",
            decode_currency_amount,
        )?,
        debt_recovery_item_list: decode::optional_field(object, "DebtRecoveryItemList", |list| {
            decode::ensure_array(list, "DebtRecoveryItem", decode_debt_recovery_item)
        })?,
        charge_instrument_list: decode::optional_field(object, "ChargeInstrumentList", |list| {
            decode::ensure_array(list, "ChargeInstrument", decode_charge_instrument)
        })?,
    })
}

fn decode_adjustment_item(value: &Value) -> DecodeResult<AdjustmentItem> {
    let object = decode::object(value)?;
    Ok(AdjustmentItem {
        quantity: decode::optional_field(object, "Quantity", decode::ensure_string)?,
        per_unit_amount: decode::optional_field(object, "PerUnitAmount", decode_currency_amount)?,
        total_amount: decode::optional_field(object, "TotalAmount", decode_currency_amount)?,
        seller_sku: decode::optional_field(object, "SellerSKU", decode::ensure_string)?,
        fn_sku: decode::optional_field(object, "FnSKU", decode::ensure_string)?,
        product_description: decode::optional_field(
            object,
            "ProductDescription",
            decode::string,
        )?,
        asin: decode::optional_field(object, "ASIN", decode::string)?,
    })
}

fn decode_adjustment_event(value: &Value) -> DecodeResult<AdjustmentEvent> {
    let object = decode::object(value)?;
    Ok(AdjustmentEvent {
        adjustment_type: decode::optional_field(object, "AdjustmentType", decode::enumeration)?,
        adjustment_amount: decode::optional_field(
            object,
            "AdjustmentAmount",
            decode_currency_amount,
        )?,
        adjustment_item_list: decode::optional_field(object, "AdjustmentItemList", |list| {
            decode::ensure_array(list, "AdjustmentItem", decode_adjustment_item)
        })?,
        posted_date: decode::optional_field(object, "PostedDate", decode::datetime)?,
    })
}

fn decode_coupon_payment_event(value: &Value) -> DecodeResult<CouponPaymentEvent> {
    let object = decode::object(value)?;
    Ok(CouponPaymentEvent {
        posted_date: decode::optional_field(object, "PostedDate", decode::datetime)?,
        coupon_id: decode::optional_field(object, "CouponId", decode::ensure_string)?,
        seller_coupon_description: decode::optional_field(
            object,
            "SellerCouponDescription",
            decode::string,
        )?,
        clip_or_redemption_count: decode::optional_field(
            object,
            "ClipOrRedemptionCount",
            decode::ensure_int,
        )?,
        payment_event_id: decode::optional_field(object, "PaymentEventId", decode::ensure_string)?,
        fee_component: decode::optional_field(object, "FeeComponent", decode_fee_component)?,
        charge_component: decode::optional_field(
            object,
            "ChargeComponent",
            decode_charge_component,
        )?,
        total_amount: decode::optional_field(object, "TotalAmount", decode_currency_amount)?,
    })
}

fn decode_safet_reimbursement_item(value: &Value) -> DecodeResult<SafetReimbursementItem> {
    let object = decode::object(value)?;
    Ok(SafetReimbursementItem {
        item_charge_list: decode::optional_field(object, "ItemChargeList", |list| {
            decode::ensure_array(list, "ChargeComponent", decode_charge_component)
        })?,
    })
}

fn decode_safet_reimbursement_event(value: &Value) -> DecodeResult<SafetReimbursementEvent> {
    let object = decode::object(value)?;
    Ok(SafetReimbursementEvent {
        posted_date: decode::optional_field(object, "PostedDate", decode::datetime)?,
        safet_claim_id: decode::optional_field(object, "SAFETClaimId", decode::ensure_string)?,
        reimbursed_amount: decode::optional_field(
            object,
            "ReimbursedAmount",
            decode_currency_amount,
        )?,
        safet_reimbursement_item_list: decode::optional_field(
            object,
            "SAFETReimbursementItemList",
            |list| {
                decode::ensure_array(list, "SAFETReimbursementItem", decode_safet_reimbursement_item)
            },
        )?,
    })
}

fn decode_financial_event_group(value: &Value) -> DecodeResult<FinancialEventGroup> {
    let object = decode::object(value)?;
    Ok(FinancialEventGroup {
        financial_event_group_id: decode::optional_field(
            object,
            "FinancialEventGroupId",
            decode::ensure_string,
        )?,
        processing_status: decode::optional_field(
            object,
            "ProcessingStatus",
            decode::enumeration,
        )?,
        fund_transfer_status: decode::optional_field(object, "FundTransferStatus", decode::string)?,
        original_total: decode::optional_field(object, "OriginalTotal", decode_currency_amount)?,
        converted_total: decode::optional_field(object, "ConvertedTotal", decode_currency_amount)?,
        fund_transfer_date: decode::optional_field(object, "FundTransferDate", decode::datetime)?,
        trace_id: decode::optional_field(object, "TraceId", decode::ensure_string)?,
        account_tail: decode::optional_field(object, "AccountTail", decode::ensure_string)?,
        beginning_balance: decode::optional_field(
            object,
            "BeginningBalance",
            decode_currency_amount,
        )?,
        financial_event_group_start: decode::optional_field(
            object,
            "FinancialEventGroupStart",
            decode::datetime,
        )?,
        financial_event_group_end: decode::optional_field(
            object,
            "FinancialEventGroupEnd",
            decode::datetime,
        )?,
    })
}

#[allow(clippy::too_many_lines)]
fn decode_financial_events(value: &Value) -> DecodeResult<FinancialEvents> {
    let object = decode::object(value)?;
    let shipments = |list: &Value| decode::ensure_array(list, "ShipmentEvent", decode_shipment_event);
    Ok(FinancialEvents {
        shipment_event_list: decode::optional_field(object, "ShipmentEventList", shipments)?,
        refund_event_list: decode::optional_field(object, "RefundEventList", shipments)?,
        guarantee_claim_event_list: decode::optional_field(
            object,
            "GuaranteeClaimEventList",
            shipments,
        )?,
        chargeback_event_list: decode::optional_field(object, "ChargebackEventList", shipments)?,
        pay_with_amazon_event_list: decode::optional_field(
            object,
            "PayWithAmazonEventList",
            |list| decode::ensure_array(list, "PayWithAmazonEvent", decode_pay_with_amazon_event),
        )?,
        retrocharge_event_list: decode::optional_field(object, "RetrochargeEventList", |list| {
            decode::ensure_array(list, "RetrochargeEvent", decode_retrocharge_event)
        })?,
        product_ads_payment_event_list: decode::optional_field(
            object,
            "ProductAdsPaymentEventList",
            |list| {
                decode::ensure_array(list, "ProductAdsPaymentEvent", decode_product_ads_payment_event)
            },
        )?,
        service_fee_event_list: decode::optional_field(object, "ServiceFeeEventList", |list| {
            decode::ensure_array(list, "ServiceFeeEvent", decode_service_fee_event)
        })?,
        debt_recovery_event_list: decode::optional_field(object, "DebtRecoveryEventList", |list| {
            decode::ensure_array(list, "DebtRecoveryEvent", decode_debt_recovery_event)
        })?,
        adjustment_event_list: decode::optional_field(object, "AdjustmentEventList", |list| {
            decode::ensure_array(list, "AdjustmentEvent", decode_adjustment_event)
        })?,
        coupon_payment_event_list: decode::optional_field(
            object,
            "CouponPaymentEventList",
            |list| decode::ensure_array(list, "CouponPaymentEvent", decode_coupon_payment_event),
        )?,
        safet_reimbursement_event_list: decode::optional_field(
            object,
            "SAFETReimbursementEventList",
            |list| {
                decode::ensure_array(
                    list,
                    "SAFETReimbursementEvent",
                    decode_safet_reimbursement_event,
                )
            },
        )?,
        affordability_expense_event_list: decode::optional_field(
            object,
            "AffordabilityExpenseEventList",
            |list| {
                decode::ensure_array(list, "AffordabilityExpenseEvent", decode_affordability_expense_event)
            },
        )?,
        // Documented payloads name the member element
        // `AffordabilityExpenseReversalEvent`; observed samples name it
        // `AffordabilityExpenseEvent`. Accept both.
        affordability_expense_reversal_event_list: decode::optional_field(
            object,
            "AffordabilityExpenseReversalEventList",
            |list| {
                decode::one_of(
                    list,
                    &[
                        &|v| {
                            decode::ensure_array(
                                v,
                                "AffordabilityExpenseReversalEvent",
                                decode_affordability_expense_event,
                            )
                        },
                        &|v| {
                            decode::ensure_array(
                                v,
                                "AffordabilityExpenseEvent",
                                decode_affordability_expense_event,
                            )
                        },
                    ],
                )
            },
        )?,
    })
}

fn decode_event_groups_result(value: &Value) -> DecodeResult<ListFinancialEventGroupsResult> {
    let object = decode::object(value)?;
    Ok(ListFinancialEventGroupsResult {
        next_token: decode::optional_field(
            object,
            "NextToken",
            decode::next_token("ListFinancialEventGroups"),
        )?,
        financial_event_group_list: decode::field(object, "FinancialEventGroupList", |list| {
            decode::ensure_array(list, "FinancialEventGroup", decode_financial_event_group)
        })?,
    })
}

fn decode_events_result(value: &Value) -> DecodeResult<ListFinancialEventsResult> {
    let object = decode::object(value)?;
    Ok(ListFinancialEventsResult {
        next_token: decode::optional_field(
            object,
            "NextToken",
            decode::next_token("ListFinancialEvents"),
        )?,
        financial_events: decode::field(object, "FinancialEvents", decode_financial_events)?,
    })
}

/// Operations of the `Finances` resource.
pub struct Finances<'a> {
    pub(crate) client: &'a HttpClient,
}

impl Finances<'_> {
    /// Lists financial event groups opened within the given window.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn list_financial_event_groups(
        &self,
        parameters: &ListFinancialEventGroupsParameters,
    ) -> Result<(ListFinancialEventGroupsResult, RequestMeta), MwsError> {
        let mut wire = Parameters::new();
        wire.insert(
            "FinancialEventGroupStartedAfter",
            iso8601(&parameters.financial_event_group_started_after),
        );
        wire.insert_opt(
            "FinancialEventGroupStartedBefore",
            parameters
                .financial_event_group_started_before
                .as_ref()
                .map(iso8601),
        );
        wire.insert_opt(
            "MaxResultsPerPage",
            parameters.max_results_per_page.map(|n| n.to_string()),
        );
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Finances,
                FINANCES_API_VERSION,
                "ListFinancialEventGroups",
                &wire,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "ListFinancialEventGroupsResponse",
            "ListFinancialEventGroupsResult",
            decode_event_groups_result,
        )?;
        Ok((result, meta))
    }

    /// Continues an event group listing from a previous page's token.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn list_financial_event_groups_by_next_token(
        &self,
        next_token: &NextToken,
    ) -> Result<(ListFinancialEventGroupsResult, RequestMeta), MwsError> {
        let mut parameters = Parameters::new();
        parameters.insert_next_token(next_token);
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Finances,
                FINANCES_API_VERSION,
                "ListFinancialEventGroupsByNextToken",
                &parameters,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "ListFinancialEventGroupsByNextTokenResponse",
            "ListFinancialEventGroupsByNextTokenResult",
            decode_event_groups_result,
        )?;
        Ok((result, meta))
    }

    /// Lists financial events for an order, a group, or a posting window.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn list_financial_events(
        &self,
        parameters: &ListFinancialEventsParameters,
    ) -> Result<(ListFinancialEventsResult, RequestMeta), MwsError> {
        let mut wire = Parameters::new();
        wire.insert_opt("AmazonOrderId", parameters.amazon_order_id.clone());
        wire.insert_opt(
            "FinancialEventGroupId",
            parameters.financial_event_group_id.clone(),
        );
        wire.insert_opt("PostedAfter", parameters.posted_after.as_ref().map(iso8601));
        wire.insert_opt(
            "PostedBefore",
            parameters.posted_before.as_ref().map(iso8601),
        );
        wire.insert_opt(
            "MaxResultsPerPage",
            parameters.max_results_per_page.map(|n| n.to_string()),
        );
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Finances,
                FINANCES_API_VERSION,
                "ListFinancialEvents",
                &wire,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "ListFinancialEventsResponse",
            "ListFinancialEventsResult",
            decode_events_result,
        )?;
        Ok((result, meta))
    }

    /// Continues an event listing from a previous page's token.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn list_financial_events_by_next_token(
        &self,
        next_token: &NextToken,
    ) -> Result<(ListFinancialEventsResult, RequestMeta), MwsError> {
        let mut parameters = Parameters::new();
        parameters.insert_next_token(next_token);
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Finances,
                FINANCES_API_VERSION,
                "ListFinancialEventsByNextToken",
                &parameters,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "ListFinancialEventsByNextTokenResponse",
            "ListFinancialEventsByNextTokenResult",
            decode_events_result,
        )?;
        Ok((result, meta))
    }

    /// Reports the operational status of the Finances API.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn get_service_status(
        &self,
    ) -> Result<(ServiceStatusResult, RequestMeta), MwsError> {
        get_service_status_by_resource(self.client, Resource::Finances, FINANCES_API_VERSION).await
    }
}
