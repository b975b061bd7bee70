//! The Sellers section: marketplace participation listings.

use serde::Serialize;
use serde_json::Value;

use crate::client::{HttpClient, HttpMethod, Parameters, RequestMeta, Resource};
use crate::decode::{self, DecodeResult, NextToken};
use crate::error::MwsError;
use crate::sections::shared::{decode_envelope, get_service_status_by_resource, ServiceStatusResult};

const SELLERS_API_VERSION: &str = "2011-07-01";

/// A marketplace the seller participates in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Participation {
    /// Marketplace the participation applies to.
    pub marketplace_id: String,
    /// The participating seller's id.
    pub seller_id: String,
    /// Whether the seller has suspended listings in this marketplace.
    pub has_seller_suspended_listings: Option<String>,
}

/// A marketplace the seller can participate in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Marketplace {
    /// Marketplace identifier.
    pub marketplace_id: String,
    /// Display name of the marketplace.
    pub name: String,
    /// Default country code.
    pub default_country_code: Option<String>,
    /// Default currency code.
    pub default_currency_code: Option<String>,
    /// Default language code.
    pub default_language_code: Option<String>,
    /// Domain name the marketplace is served from.
    pub domain_name: Option<String>,
}

/// Decoded result of `ListMarketplaceParticipations`.
#[derive(Clone, Debug, Serialize)]
pub struct ListMarketplaceParticipationsResult {
    /// Continuation token for the next page, when more data exists.
    pub next_token: Option<NextToken>,
    /// Participations for the calling seller.
    pub participations: Vec<Participation>,
    /// Marketplaces referenced by the participations.
    pub marketplaces: Vec<Marketplace>,
}

fn decode_participation(value: &Value) -> DecodeResult<Participation> {
    let object = decode::object(value)?;
    Ok(Participation {
        marketplace_id: decode::field(object, "MarketplaceId", decode::string)?,
        seller_id: decode::field(object, "SellerId", decode::string)?,
        has_seller_suspended_listings: decode::optional_field(
            object,
            "HasSellerSuspendedListings",
            decode::ensure_string,
        )?,
    })
}

fn decode_marketplace(value: &Value) -> DecodeResult<Marketplace> {
    let object = decode::object(value)?;
    Ok(Marketplace {
        marketplace_id: decode::field(object, "MarketplaceId", decode::string)?,
        name: decode::field(object, "Name", decode::string)?,
        default_country_code: decode::optional_field(object, "DefaultCountryCode", decode::string)?,
        default_currency_code: decode::optional_field(
            object,
            "DefaultCurrencyCode",
            decode::string,
        )?,
        default_language_code: decode::optional_field(
            object,
            "DefaultLanguageCode",
            decode::string,
        )?,
        domain_name: decode::optional_field(object, "DomainName", decode::string)?,
    })
}

fn decode_participations_result(
    value: &Value,
) -> DecodeResult<ListMarketplaceParticipationsResult> {
    let object = decode::object(value)?;
    Ok(ListMarketplaceParticipationsResult {
        next_token: decode::optional_field(
            object,
            "NextToken",
            decode::next_token("ListMarketplaceParticipations"),
        )?,
        participations: decode::field(object, "ListParticipations", |list| {
            decode::ensure_array(list, "Participation", decode_participation)
        })?,
        marketplaces: decode::field(object, "ListMarketplaces", |list| {
            decode::ensure_array(list, "Marketplace", decode_marketplace)
        })?,
    })
}

/// Operations of the `Sellers` resource.
pub struct Sellers<'a> {
    pub(crate) client: &'a HttpClient,
}

impl Sellers<'_> {
    /// Lists the marketplaces the seller participates in.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn list_marketplace_participations(
        &self,
    ) -> Result<(ListMarketplaceParticipationsResult, RequestMeta), MwsError> {
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Sellers,
                SELLERS_API_VERSION,
                "ListMarketplaceParticipations",
                &Parameters::new(),
            )
            .await?;
        let result = decode_envelope(
            &response,
            "ListMarketplaceParticipationsResponse",
            "ListMarketplaceParticipationsResult",
            decode_participations_result,
        )?;
        Ok((result, meta))
    }

    /// Continues a participation listing from a previous page's token.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn list_marketplace_participations_by_next_token(
        &self,
        next_token: &NextToken,
    ) -> Result<(ListMarketplaceParticipationsResult, RequestMeta), MwsError> {
        let mut parameters = Parameters::new();
        parameters.insert_next_token(next_token);
        let (response, meta) = self
            .client
            .request(
                HttpMethod::Post,
                Resource::Sellers,
                SELLERS_API_VERSION,
                "ListMarketplaceParticipationsByNextToken",
                &parameters,
            )
            .await?;
        let result = decode_envelope(
            &response,
            "ListMarketplaceParticipationsByNextTokenResponse",
            "ListMarketplaceParticipationsByNextTokenResult",
            decode_participations_result,
        )?;
        Ok((result, meta))
    }

    /// Reports the operational status of the Sellers API.
    ///
    /// # Errors
    ///
    /// Returns [`MwsError::Http`] on transport failure and
    /// [`MwsError::Parsing`] when the response payload does not decode.
    pub async fn get_service_status(
        &self,
    ) -> Result<(ServiceStatusResult, RequestMeta), MwsError> {
        get_service_status_by_resource(self.client, Resource::Sellers, SELLERS_API_VERSION).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_participation_normalizes_to_one_element() {
        let value = json!({
            "ListParticipations": {
                "Participation": {
                    "MarketplaceId": "ATVPDKIKX0DER",
                    "SellerId": "A2EXAMPLE",
                    "HasSellerSuspendedListings": "No"
                }
            },
            "ListMarketplaces": {
                "Marketplace": {
                    "MarketplaceId": "ATVPDKIKX0DER",
                    "Name": "Amazon.com"
                }
            }
        });
        let result = decode_participations_result(&value).unwrap();
        assert_eq!(result.participations.len(), 1);
        assert_eq!(result.marketplaces.len(), 1);
        assert_eq!(result.participations[0].seller_id, "A2EXAMPLE");
        assert!(result.next_token.is_none());
    }

    #[test]
    fn test_next_token_is_tagged_with_the_listing_operation() {
        let value = json!({
            "NextToken": "raw-server-token",
            "ListParticipations": "",
            "ListMarketplaces": ""
        });
        let result = decode_participations_result(&value).unwrap();
        let token = result.next_token.unwrap();
        assert_eq!(token.operation(), "ListMarketplaceParticipations");
        assert_eq!(token.value(), "raw-server-token");
    }

    #[test]
    fn test_missing_participation_list_is_a_failure() {
        let error = decode_participations_result(&json!({})).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Problem with the value of property \"ListParticipations\": it does not exist"
        );
    }
}
