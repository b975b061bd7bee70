//! Section-level decoding tests over realistic XML fixtures.

mod common;

use common::{mock_mws, MockTransport};
use mws_sdk::sections::finances::{ChargeType, ProcessingStatus};
use mws_sdk::sections::fulfillment_inbound_shipment::{
    CreateInboundShipmentPlanParameters, GuidanceReason, InboundAddress, InboundGuidance,
    InboundShipmentHeader, InboundShipmentItem, InboundShipmentParameters,
    InboundShipmentPlanRequestItem, LabelPrepPreference, ShipmentStatus,
};
use mws_sdk::sections::orders::OrderStatus;
use mws_sdk::sections::ServiceStatus;
use mws_sdk::MwsError;

const PARTICIPATIONS_BODY: &str = r#"<?xml version="1.0"?>
<ListMarketplaceParticipationsResponse>
  <ListMarketplaceParticipationsResult>
    <ListParticipations>
      <Participation>
        <MarketplaceId>ATVPDKIKX0DER</MarketplaceId>
        <SellerId>A2EXAMPLE</SellerId>
        <HasSellerSuspendedListings>No</HasSellerSuspendedListings>
      </Participation>
    </ListParticipations>
    <ListMarketplaces>
      <Marketplace>
        <MarketplaceId>ATVPDKIKX0DER</MarketplaceId>
        <Name>Amazon.com</Name>
        <DefaultCountryCode>US</DefaultCountryCode>
        <DefaultCurrencyCode>USD</DefaultCurrencyCode>
        <DefaultLanguageCode>en_US</DefaultLanguageCode>
        <DomainName>www.amazon.com</DomainName>
      </Marketplace>
    </ListMarketplaces>
  </ListMarketplaceParticipationsResult>
  <ResponseMetadata>
    <RequestId>fa77a93e-d171-4c3f-941c-c4c343f4e953</RequestId>
  </ResponseMetadata>
</ListMarketplaceParticipationsResponse>"#;

const EVENT_GROUPS_BODY: &str = r#"<?xml version="1.0"?>
<ListFinancialEventGroupsResponse>
  <ListFinancialEventGroupsResult>
    <FinancialEventGroupList>
      <FinancialEventGroup>
        <FinancialEventGroupId>22YgYW55IGNhcm5hbCBwbGVhEXAMPLE</FinancialEventGroupId>
        <ProcessingStatus>Closed</ProcessingStatus>
        <FundTransferStatus>Successful</FundTransferStatus>
        <OriginalTotal>
          <CurrencyCode>USD</CurrencyCode>
          <CurrencyAmount>19.00</CurrencyAmount>
        </OriginalTotal>
        <FinancialEventGroupStart>2020-02-01T00:00:00Z</FinancialEventGroupStart>
        <FinancialEventGroupEnd>2020-02-15T00:00:00Z</FinancialEventGroupEnd>
      </FinancialEventGroup>
    </FinancialEventGroupList>
  </ListFinancialEventGroupsResult>
  <ResponseMetadata>
    <RequestId>75a85d0a-9c6f-471b-b56c-e9aabfb12cf0</RequestId>
  </ResponseMetadata>
</ListFinancialEventGroupsResponse>"#;

const FINANCIAL_EVENTS_BODY: &str = r#"<?xml version="1.0"?>
<ListFinancialEventsResponse>
  <ListFinancialEventsResult>
    <FinancialEvents>
      <ShipmentEventList>
        <ShipmentEvent>
          <AmazonOrderId>902-1845936-5435065</AmazonOrderId>
          <PostedDate>2020-02-05T13:15:30Z</PostedDate>
          <ShipmentItemList>
            <ShipmentItem>
              <SellerSKU>SKU-1</SellerSKU>
              <QuantityShipped>2</QuantityShipped>
              <ItemChargeList>
                <ChargeComponent>
                  <ChargeType>Principal</ChargeType>
                  <ChargeAmount>
                    <CurrencyCode>USD</CurrencyCode>
                    <CurrencyAmount>10.00</CurrencyAmount>
                  </ChargeAmount>
                </ChargeComponent>
                <ChargeComponent>
                  <ChargeType>MarketplaceFacilitatorTax-Principal</ChargeType>
                  <ChargeAmount>
                    <CurrencyCode>USD</CurrencyCode>
                    <CurrencyAmount>-0.50</CurrencyAmount>
                  </ChargeAmount>
                </ChargeComponent>
              </ItemChargeList>
            </ShipmentItem>
          </ShipmentItemList>
        </ShipmentEvent>
      </ShipmentEventList>
      <ProductAdsPaymentEventList>
        <ProductAdsPaymentEvent>
          <postedDate>2020-02-05T13:15:30Z</postedDate>
          <transactionType>Charge</transactionType>
          <invoiceId>TRX-123</invoiceId>
          <transactionValue>
            <CurrencyCode>USD</CurrencyCode>
            <CurrencyAmount>5.00</CurrencyAmount>
          </transactionValue>
        </ProductAdsPaymentEvent>
      </ProductAdsPaymentEventList>
    </FinancialEvents>
  </ListFinancialEventsResult>
  <ResponseMetadata>
    <RequestId>75a85d0a-9c6f-471b-b56c-e9aabfb12cf0</RequestId>
  </ResponseMetadata>
</ListFinancialEventsResponse>"#;

const SKU_GUIDANCE_BODY: &str = r#"<?xml version="1.0"?>
<GetInboundGuidanceForSKUResponse>
  <GetInboundGuidanceForSKUResult>
    <SKUInboundGuidanceList>
      <SKUInboundGuidance>
        <SellerSKU>SKU-1</SellerSKU>
        <ASIN>B0000EXAMPLE</ASIN>
        <InboundGuidance>InboundNotRecommended</InboundGuidance>
        <GuidanceReasonList>
          <GuidanceReason>SlowMovingASIN</GuidanceReason>
        </GuidanceReasonList>
      </SKUInboundGuidance>
    </SKUInboundGuidanceList>
    <InvalidSKUList>
      <InvalidSKU>
        <SellerSKU>GONE</SellerSKU>
        <ErrorReason>DoesNotExist</ErrorReason>
      </InvalidSKU>
    </InvalidSKUList>
  </GetInboundGuidanceForSKUResult>
  <ResponseMetadata>
    <RequestId>93837007-1971-441b-a5fb-2d1bcfb1a6bd</RequestId>
  </ResponseMetadata>
</GetInboundGuidanceForSKUResponse>"#;

const SHIPMENT_PLAN_BODY: &str = r#"<?xml version="1.0"?>
<CreateInboundShipmentPlanResponse>
  <CreateInboundShipmentPlanResult>
    <InboundShipmentPlans>
      <member>
        <ShipmentId>FBA1234</ShipmentId>
        <DestinationFulfillmentCenterId>ABE2</DestinationFulfillmentCenterId>
        <ShipToAddress>
          <Name>FC Receiving</Name>
          <AddressLine1>1 Warehouse Way</AddressLine1>
          <City>Breinigsville</City>
          <StateOrProvinceCode>PA</StateOrProvinceCode>
          <CountryCode>US</CountryCode>
          <PostalCode>18031</PostalCode>
        </ShipToAddress>
        <LabelPrepType>SELLER_LABEL</LabelPrepType>
        <Items>
          <member>
            <SellerSKU>SKU-1</SellerSKU>
            <FulfillmentNetworkSKU>X000EXAMPLE</FulfillmentNetworkSKU>
            <Quantity>10</Quantity>
          </member>
        </Items>
      </member>
    </InboundShipmentPlans>
  </CreateInboundShipmentPlanResult>
  <ResponseMetadata>
    <RequestId>a5ec2674-0b7c-4d78-84cd-a69b3b9cbbf8</RequestId>
  </ResponseMetadata>
</CreateInboundShipmentPlanResponse>"#;

const UPDATE_SHIPMENT_BODY: &str = r#"<?xml version="1.0"?>
<UpdateInboundShipmentResponse>
  <UpdateInboundShipmentResult>
    <ShipmentId>FBA1234</ShipmentId>
  </UpdateInboundShipmentResult>
  <ResponseMetadata>
    <RequestId>35e1f4f4-2a7c-4e5d-a08b-d0d5e9d3b0a6</RequestId>
  </ResponseMetadata>
</UpdateInboundShipmentResponse>"#;

const REPORT_REQUEST_LIST_BODY: &str = r#"<?xml version="1.0"?>
<GetReportRequestListResponse>
  <GetReportRequestListResult>
    <HasNext>true</HasNext>
    <NextToken>2YgYW55IGNhcm5hbCBwbGVhc3VyZS4=</NextToken>
    <ReportRequestInfo>
      <ReportRequestId>2291326454</ReportRequestId>
      <ReportType>_GET_MERCHANT_LISTINGS_ALL_DATA_</ReportType>
      <StartDate>2009-01-21T02:10:39+00:00</StartDate>
      <EndDate>2009-02-13T02:10:39+00:00</EndDate>
      <Scheduled>false</Scheduled>
      <SubmittedDate>2009-02-20T02:10:39+00:00</SubmittedDate>
      <ReportProcessingStatus>_SUBMITTED_</ReportProcessingStatus>
    </ReportRequestInfo>
    <ReportRequestInfo>
      <ReportRequestId>2291326455</ReportRequestId>
      <ReportType>_GET_FLAT_FILE_OPEN_LISTINGS_DATA_</ReportType>
      <StartDate>2009-01-21T02:10:39+00:00</StartDate>
      <EndDate>2009-02-13T02:10:39+00:00</EndDate>
      <Scheduled>false</Scheduled>
      <SubmittedDate>2009-02-20T02:10:39+00:00</SubmittedDate>
      <ReportProcessingStatus>_DONE_</ReportProcessingStatus>
    </ReportRequestInfo>
  </GetReportRequestListResult>
  <ResponseMetadata>
    <RequestId>732480cb-84a8-4c15-9084-a46bd9a0189b</RequestId>
  </ResponseMetadata>
</GetReportRequestListResponse>"#;

#[tokio::test]
async fn test_participations_fixture_decodes() {
    let (mws, _transport) = mock_mws(MockTransport::new(PARTICIPATIONS_BODY));
    let (result, _meta) = mws
        .sellers()
        .list_marketplace_participations()
        .await
        .unwrap();

    assert_eq!(result.participations.len(), 1);
    assert_eq!(result.participations[0].marketplace_id, "ATVPDKIKX0DER");
    assert_eq!(result.marketplaces[0].name, "Amazon.com");
    assert!(result.next_token.is_none());
}

#[tokio::test]
async fn test_event_groups_fixture_decodes() {
    let (mws, _transport) = mock_mws(MockTransport::new(EVENT_GROUPS_BODY));
    let parameters = mws_sdk::sections::finances::ListFinancialEventGroupsParameters {
        financial_event_group_started_after: chrono::Utc::now(),
        financial_event_group_started_before: None,
        max_results_per_page: None,
    };
    let (result, _meta) = mws
        .finances()
        .list_financial_event_groups(&parameters)
        .await
        .unwrap();

    let group = &result.financial_event_group_list[0];
    assert_eq!(group.processing_status, Some(ProcessingStatus::Closed));
    assert_eq!(group.fund_transfer_status.as_deref(), Some("Successful"));
    assert!(
        (group.original_total.as_ref().unwrap().currency_amount.unwrap() - 19.0).abs()
            < f64::EPSILON
    );
}

#[tokio::test]
async fn test_financial_events_fixture_decodes_quirky_shapes() {
    let (mws, _transport) = mock_mws(MockTransport::new(FINANCIAL_EVENTS_BODY));
    let (result, _meta) = mws
        .finances()
        .list_financial_events(&mws_sdk::sections::finances::ListFinancialEventsParameters {
            posted_after: Some(chrono::Utc::now()),
            ..Default::default()
        })
        .await
        .unwrap();

    let shipments = result.financial_events.shipment_event_list.unwrap();
    let item = &shipments[0].shipment_item_list.as_ref().unwrap()[0];
    assert_eq!(item.quantity_shipped, Some(2));
    let charges = item.item_charge_list.as_ref().unwrap();
    assert_eq!(charges[0].charge_type, Some(ChargeType::Principal));
    assert_eq!(
        charges[1].charge_type,
        Some(ChargeType::MarketplaceFacilitatorTaxPrincipal)
    );

    let ads = result.financial_events.product_ads_payment_event_list.unwrap();
    assert_eq!(ads[0].invoice_id.as_deref(), Some("TRX-123"));
    assert!(ads[0].transaction_type.is_some());
}

#[tokio::test]
async fn test_sku_guidance_fixture_decodes() {
    let (mws, _transport) = mock_mws(MockTransport::new(SKU_GUIDANCE_BODY));
    let (result, _meta) = mws
        .fulfillment_inbound_shipment()
        .get_inbound_guidance_for_sku(&["SKU-1".to_string(), "GONE".to_string()], "ATVPDKIKX0DER")
        .await
        .unwrap();

    let guidance = &result.sku_inbound_guidance_list[0];
    assert_eq!(
        guidance.inbound_guidance,
        InboundGuidance::InboundNotRecommended
    );
    assert_eq!(
        guidance.guidance_reason_list,
        Some(vec![GuidanceReason::SlowMovingAsin])
    );
    assert_eq!(result.invalid_sku_list.unwrap()[0].seller_sku, "GONE");
}

#[tokio::test]
async fn test_shipment_plan_fixture_decodes() {
    let (mws, transport) = mock_mws(MockTransport::new(SHIPMENT_PLAN_BODY));
    let parameters = CreateInboundShipmentPlanParameters {
        ship_from_address: InboundAddress {
            name: "Seller Co".to_string(),
            address_line_1: "42 Commerce St".to_string(),
            address_line_2: None,
            city: "Seattle".to_string(),
            district_or_county: None,
            state_or_province_code: Some("WA".to_string()),
            country_code: "US".to_string(),
            postal_code: Some("98101".to_string()),
        },
        ship_to_country_code: None,
        ship_to_country_subdivision_code: None,
        label_prep_preference: None,
        inbound_shipment_plan_request_items: vec![InboundShipmentPlanRequestItem {
            seller_sku: "SKU-1".to_string(),
            asin: None,
            condition: None,
            quantity: 10,
            quantity_in_case: None,
            prep_details_list: None,
        }],
    };
    let (result, _meta) = mws
        .fulfillment_inbound_shipment()
        .create_inbound_shipment_plan(&parameters)
        .await
        .unwrap();

    let plan = &result.inbound_shipment_plans[0];
    assert_eq!(plan.shipment_id, "FBA1234");
    assert_eq!(plan.items[0].fulfillment_network_sku, "X000EXAMPLE");

    // Nested items flatten onto the wire with one-based member indexes.
    let requests = transport.requests();
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains("Action=CreateInboundShipmentPlan"));
    assert!(body.contains("ShipFromAddress.Name=Seller%20Co"));
    assert!(body.contains("InboundShipmentPlanRequestItems.member.1.SellerSKU=SKU-1"));
}

#[tokio::test]
async fn test_update_shipment_fixture_returns_the_shipment_id() {
    let (mws, transport) = mock_mws(MockTransport::new(UPDATE_SHIPMENT_BODY));
    let parameters = InboundShipmentParameters {
        shipment_id: "FBA1234".to_string(),
        inbound_shipment_header: InboundShipmentHeader {
            shipment_name: "February replenishment".to_string(),
            ship_from_address: InboundAddress {
                name: "Seller Co".to_string(),
                address_line_1: "42 Commerce St".to_string(),
                address_line_2: None,
                city: "Seattle".to_string(),
                district_or_county: None,
                state_or_province_code: Some("WA".to_string()),
                country_code: "US".to_string(),
                postal_code: Some("98101".to_string()),
            },
            destination_fulfillment_center_id: "ABE2".to_string(),
            label_prep_preference: LabelPrepPreference::SellerLabel,
            shipment_status: ShipmentStatus::Working,
        },
        inbound_shipment_items: vec![InboundShipmentItem {
            seller_sku: "SKU-1".to_string(),
            quantity_shipped: 10,
            quantity_in_case: None,
            prep_details_list: None,
        }],
    };
    let (result, _meta) = mws
        .fulfillment_inbound_shipment()
        .update_inbound_shipment(&parameters)
        .await
        .unwrap();

    assert_eq!(result.shipment_id, "FBA1234");

    let requests = transport.requests();
    let body = requests[0].body.as_deref().unwrap();
    assert!(body.contains("Action=UpdateInboundShipment"));
    assert!(body.contains("InboundShipmentHeader.ShipmentStatus=WORKING"));
    assert!(body.contains("InboundShipmentItems.member.1.QuantityShipped=10"));
}

#[tokio::test]
async fn test_report_request_list_fixture_decodes() {
    let (mws, _transport) = mock_mws(MockTransport::new(REPORT_REQUEST_LIST_BODY));
    let (result, _meta) = mws
        .reports()
        .get_report_request_list(&Default::default())
        .await
        .unwrap();

    assert_eq!(result.has_next, Some(true));
    assert_eq!(result.report_request_info_list.len(), 2);
    assert_eq!(
        result.report_request_info_list[0].report_request_id,
        "2291326454"
    );
    assert_eq!(
        result.next_token.as_ref().unwrap().operation(),
        "GetReportRequestList"
    );
}

#[tokio::test]
async fn test_service_status_across_sections() {
    let body = r#"<GetServiceStatusResponse>
      <GetServiceStatusResult>
        <Status>YELLOW</Status>
        <Timestamp>2020-05-06T08:22:23.582Z</Timestamp>
      </GetServiceStatusResult>
    </GetServiceStatusResponse>"#;

    let (mws, transport) = mock_mws(MockTransport::new(body));
    let (status, _) = mws.finances().get_service_status().await.unwrap();
    assert_eq!(status.status, ServiceStatus::Yellow);
    let (status, _) = mws.subscriptions().get_service_status().await.unwrap();
    assert_eq!(status.status, ServiceStatus::Yellow);
    let (status, _) = mws.merchant_fulfillment().get_service_status().await.unwrap();
    assert_eq!(status.status, ServiceStatus::Yellow);

    let requests = transport.requests();
    assert!(requests[2].url.contains("/MerchantFulfillment/2015-06-01"));
}

#[tokio::test]
async fn test_wrong_envelope_is_a_parsing_error() {
    // Sellers response arriving for an Orders call: envelope key mismatch.
    let (mws, _transport) = mock_mws(MockTransport::new(PARTICIPATIONS_BODY));
    let error = mws.orders().get_service_status().await.unwrap_err();
    match error {
        MwsError::Parsing(parsing) => assert_eq!(
            parsing.to_string(),
            "Problem with the value of property \"GetServiceStatusResponse\": it does not exist"
        ),
        other => panic!("expected a parsing error, got {other:?}"),
    }
}
