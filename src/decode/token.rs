//! Pagination continuation token codec.
//!
//! List operations return an opaque continuation token that the caller
//! threads into the sibling `...ByNextToken` operation. The token bundles
//! the name of the operation that minted it with the raw continuation
//! value, so a token minted for one paginated listing cannot be replayed
//! against a different one.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

use crate::decode::{ensure_string, DecodeError, DecodeResult};
use serde_json::Value;

/// Separator between the operation name and the continuation value inside
/// the encoded blob. Operation names are plain action identifiers and can
/// never contain it.
const SEPARATOR: char = '\n';

/// An opaque continuation token for resuming a paginated listing.
///
/// Serialized via [`encoded`](Self::encoded) into a single URL-safe text
/// blob so it can travel inside one request parameter; [`decode`](Self::decode)
/// reverses the transform exactly.
///
/// # Example
///
/// ```rust
/// use mws_sdk::NextToken;
///
/// let token = NextToken::new("ListOrders", "page-2");
/// let decoded = NextToken::decode(&token.encoded()).unwrap();
/// assert_eq!(decoded, token);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NextToken {
    operation: String,
    value: String,
}

impl NextToken {
    /// Creates a token for the given operation and raw continuation value.
    #[must_use]
    pub fn new(operation: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            value: value.into(),
        }
    }

    /// Returns the name of the operation that minted this token.
    #[must_use]
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Returns the raw continuation value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Encodes the token into a single reversible text blob.
    #[must_use]
    pub fn encoded(&self) -> String {
        STANDARD.encode(format!("{}{SEPARATOR}{}", self.operation, self.value))
    }

    /// Reverses [`encoded`](Self::encoded).
    ///
    /// # Errors
    ///
    /// Fails if the blob is not base64, not UTF-8, or lacks the
    /// operation/value separator.
    pub fn decode(blob: &str) -> DecodeResult<Self> {
        let malformed = || {
            DecodeError::new(format!(
                "Expected an encoded next token, but received a string with value \"{blob}\""
            ))
        };
        let bytes = STANDARD.decode(blob).map_err(|_| malformed())?;
        let text = String::from_utf8(bytes).map_err(|_| malformed())?;
        let (operation, value) = text.split_once(SEPARATOR).ok_or_else(malformed)?;
        Ok(Self::new(operation, value))
    }
}

/// Returns a decoder for next-token response fields of `operation`.
///
/// A field holding a token minted for a different operation is a decode
/// failure; this is the guard against cross-operation pagination replay. A
/// field that is not one of our encoded blobs is tolerated as a raw server
/// continuation value and tagged with this decoder's operation.
pub fn next_token(operation: &'static str) -> impl Fn(&Value) -> DecodeResult<NextToken> {
    move |value| {
        let raw = ensure_string(value)?;
        match NextToken::decode(&raw) {
            Ok(token) => {
                if token.operation() == operation {
                    Ok(token)
                } else {
                    Err(DecodeError::new(format!(
                        "Expected a next token minted by \"{operation}\", but received one minted by \"{}\"",
                        token.operation()
                    )))
                }
            }
            Err(_) => Ok(NextToken::new(operation, raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_is_exact() {
        let token = NextToken::new("ListOrders", "raw value with spaces & symbols =");
        let decoded = NextToken::decode(&token.encoded()).unwrap();
        assert_eq!(decoded.operation(), "ListOrders");
        assert_eq!(decoded.value(), "raw value with spaces & symbols =");
        assert_eq!(decoded, token);
    }

    #[test]
    fn test_round_trip_with_empty_value() {
        let token = NextToken::new("ListFinancialEvents", "");
        assert_eq!(NextToken::decode(&token.encoded()).unwrap(), token);
    }

    #[test]
    fn test_encoded_blob_is_url_parameter_safe_after_percent_encoding() {
        // base64 of "op\nvalue" never contains raw whitespace or quotes
        let blob = NextToken::new("ListOrders", "abc/123+x").encoded();
        assert!(blob.chars().all(|c| c.is_ascii_alphanumeric()
            || c == '+'
            || c == '/'
            || c == '='));
    }

    #[test]
    fn test_decoder_accepts_matching_operation() {
        let blob = NextToken::new("ListOrders", "page-2").encoded();
        let decoded = next_token("ListOrders")(&json!(blob)).unwrap();
        assert_eq!(decoded.value(), "page-2");
    }

    #[test]
    fn test_decoder_rejects_cross_operation_token() {
        let blob = NextToken::new("ListOrders", "page-2").encoded();
        let error = next_token("ListFinancialEvents")(&json!(blob)).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("ListFinancialEvents"));
        assert!(message.contains("ListOrders"));
    }

    #[test]
    fn test_decoder_tags_raw_server_tokens() {
        let decoded = next_token("ListOrders")(&json!("opaque-server-token")).unwrap();
        assert_eq!(decoded.operation(), "ListOrders");
        assert_eq!(decoded.value(), "opaque-server-token");
    }

    #[test]
    fn test_decoder_tolerates_numeric_tokens() {
        // XML scalar coercion can turn a digit-only token into a number
        let decoded = next_token("GetReportRequestList")(&json!(123)).unwrap();
        assert_eq!(decoded.value(), "123");
    }

    #[test]
    fn test_decoder_rejects_non_scalar_fields() {
        assert!(next_token("ListOrders")(&json!({})).is_err());
    }

    #[test]
    fn test_decode_rejects_malformed_blobs() {
        assert!(NextToken::decode("not base64 !!").is_err());
        // valid base64 but no separator
        let no_separator = STANDARD.encode("just-one-part");
        assert!(NextToken::decode(&no_separator).is_err());
    }
}
