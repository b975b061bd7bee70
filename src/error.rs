//! Error types for the MWS SDK.
//!
//! Two kinds of failure reach callers: a [`ParsingError`] when a response
//! payload does not match the expected shape, and an [`HttpError`](crate::client::HttpError)
//! when the request could not complete. Both are wrapped in [`MwsError`],
//! the error type returned by every section operation.
//!
//! Configuration constructors return [`ConfigError`] to enable fail-fast
//! validation with clear, actionable messages.

use thiserror::Error;

use crate::client::HttpError;
use crate::decode::DecodeError;

/// Errors that can occur during SDK configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// AWS access key id cannot be empty.
    #[error("AWS access key id cannot be empty. Please provide a valid MWS access key id.")]
    EmptyAccessKeyId,

    /// Seller id cannot be empty.
    #[error("Seller id cannot be empty. Please provide a valid merchant id.")]
    EmptySellerId,

    /// MWS auth token cannot be empty.
    #[error("MWS auth token cannot be empty. Please provide a valid MWS auth token.")]
    EmptyAuthToken,

    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide a valid MWS secret key.")]
    EmptySecretKey,

    /// Marketplace endpoint is invalid.
    #[error("Invalid marketplace endpoint '{endpoint}'. Expected an absolute URI such as 'https://mws.amazonservices.com'.")]
    InvalidEndpoint {
        /// The invalid endpoint that was provided.
        endpoint: String,
    },

    /// A required field is missing from the builder.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Error raised when a response payload does not match its expected shape.
///
/// The message preserves the decode framework's diagnostic verbatim, e.g.
/// `Expected an object, but received a string with value ""`, so operators
/// can diagnose payload drift from the error alone.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ParsingError(pub String);

impl From<DecodeError> for ParsingError {
    fn from(error: DecodeError) -> Self {
        Self(error.to_string())
    }
}

/// Unified error type for all MWS operations.
///
/// Every public section operation either resolves with a
/// `(typed value, RequestMeta)` pair or fails with exactly one `MwsError`
/// describing the first mismatch encountered.
#[derive(Debug, Error)]
pub enum MwsError {
    /// The response payload failed to decode.
    #[error(transparent)]
    Parsing(#[from] ParsingError),

    /// The request could not complete.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<DecodeError> for MwsError {
    fn from(error: DecodeError) -> Self {
        Self::Parsing(error.into())
    }
}
