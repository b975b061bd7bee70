//! Configuration types for the MWS SDK.
//!
//! The main types in this module are:
//!
//! - [`MwsConfig`]: the process-wide, read-only configuration every request
//!   needs (credentials and marketplace endpoint)
//! - [`MwsConfigBuilder`]: a builder for constructing [`MwsConfig`] instances
//! - The validated newtypes re-exported from [`newtypes`]
//!
//! Configuration is instance-based and passed explicitly into the client
//! constructor; there is no ambient global state, which keeps a test
//! transport substitutable per-instance.
//!
//! # Example
//!
//! ```rust
//! use mws_sdk::{AccessKeyId, MarketplaceEndpoint, MwsAuthToken, MwsConfig, SecretKey, SellerId};
//!
//! let config = MwsConfig::builder()
//!     .access_key_id(AccessKeyId::new("AKIAEXAMPLE").unwrap())
//!     .seller_id(SellerId::new("A2EXAMPLE").unwrap())
//!     .auth_token(MwsAuthToken::new("amzn.mws.example").unwrap())
//!     .secret_key(SecretKey::new("secret").unwrap())
//!     .endpoint(MarketplaceEndpoint::new("https://mws.amazonservices.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessKeyId, MarketplaceEndpoint, MwsAuthToken, SecretKey, SellerId};

use crate::error::ConfigError;

/// Configuration for the MWS SDK.
///
/// Holds the credentials and marketplace endpoint shared by every request.
/// Immutable after construction.
///
/// # Thread Safety
///
/// `MwsConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct MwsConfig {
    access_key_id: AccessKeyId,
    seller_id: SellerId,
    auth_token: MwsAuthToken,
    secret_key: SecretKey,
    endpoint: MarketplaceEndpoint,
}

impl MwsConfig {
    /// Creates a new builder for constructing an `MwsConfig`.
    #[must_use]
    pub fn builder() -> MwsConfigBuilder {
        MwsConfigBuilder::default()
    }

    /// Returns the AWS access key id.
    #[must_use]
    pub const fn access_key_id(&self) -> &AccessKeyId {
        &self.access_key_id
    }

    /// Returns the seller id.
    #[must_use]
    pub const fn seller_id(&self) -> &SellerId {
        &self.seller_id
    }

    /// Returns the MWS auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &MwsAuthToken {
        &self.auth_token
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the marketplace endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &MarketplaceEndpoint {
        &self.endpoint
    }
}

// Verify MwsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MwsConfig>();
};

/// Builder for constructing [`MwsConfig`] instances.
///
/// All five fields are required; [`build`](Self::build) reports the first
/// one that is missing.
#[derive(Debug, Default)]
pub struct MwsConfigBuilder {
    access_key_id: Option<AccessKeyId>,
    seller_id: Option<SellerId>,
    auth_token: Option<MwsAuthToken>,
    secret_key: Option<SecretKey>,
    endpoint: Option<MarketplaceEndpoint>,
}

impl MwsConfigBuilder {
    /// Sets the AWS access key id.
    #[must_use]
    pub fn access_key_id(mut self, access_key_id: AccessKeyId) -> Self {
        self.access_key_id = Some(access_key_id);
        self
    }

    /// Sets the seller id.
    #[must_use]
    pub fn seller_id(mut self, seller_id: SellerId) -> Self {
        self.seller_id = Some(seller_id);
        self
    }

    /// Sets the MWS auth token.
    #[must_use]
    pub fn auth_token(mut self, auth_token: MwsAuthToken) -> Self {
        self.auth_token = Some(auth_token);
        self
    }

    /// Sets the secret key.
    #[must_use]
    pub fn secret_key(mut self, secret_key: SecretKey) -> Self {
        self.secret_key = Some(secret_key);
        self
    }

    /// Sets the marketplace endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: MarketplaceEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] naming the first field
    /// that has not been set.
    pub fn build(self) -> Result<MwsConfig, ConfigError> {
        Ok(MwsConfig {
            access_key_id: self.access_key_id.ok_or(ConfigError::MissingRequiredField {
                field: "access_key_id",
            })?,
            seller_id: self
                .seller_id
                .ok_or(ConfigError::MissingRequiredField { field: "seller_id" })?,
            auth_token: self
                .auth_token
                .ok_or(ConfigError::MissingRequiredField { field: "auth_token" })?,
            secret_key: self
                .secret_key
                .ok_or(ConfigError::MissingRequiredField { field: "secret_key" })?,
            endpoint: self
                .endpoint
                .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> MwsConfigBuilder {
        MwsConfig::builder()
            .access_key_id(AccessKeyId::new("AKIAEXAMPLE").unwrap())
            .seller_id(SellerId::new("A2EXAMPLE").unwrap())
            .auth_token(MwsAuthToken::new("amzn.mws.example").unwrap())
            .secret_key(SecretKey::new("secret").unwrap())
            .endpoint(MarketplaceEndpoint::new("https://mws.amazonservices.com").unwrap())
    }

    #[test]
    fn test_builder_with_all_fields_succeeds() {
        let config = full_builder().build().unwrap();
        assert_eq!(config.access_key_id().as_ref(), "AKIAEXAMPLE");
        assert_eq!(config.endpoint().host(), "mws.amazonservices.com");
    }

    #[test]
    fn test_builder_reports_missing_field() {
        let result = MwsConfig::builder()
            .access_key_id(AccessKeyId::new("AKIAEXAMPLE").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "seller_id" })
        ));
    }

    #[test]
    fn test_config_debug_masks_secret() {
        let config = full_builder().build().unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("SecretKey(*****)"));
        assert!(!debug.contains("\"secret\""));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MwsConfig>();
    }
}
