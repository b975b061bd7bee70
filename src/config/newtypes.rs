//! Validated newtype wrappers for MWS credentials and endpoints.
//!
//! Each wrapper validates its contents on construction so that an invalid
//! credential is rejected at configuration time rather than surfacing as a
//! signed request the service refuses.

use std::fmt;

use crate::error::ConfigError;

/// A validated AWS access key id.
///
/// # Example
///
/// ```rust
/// use mws_sdk::AccessKeyId;
///
/// let key = AccessKeyId::new("AKIAEXAMPLE").unwrap();
/// assert_eq!(key.as_ref(), "AKIAEXAMPLE");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessKeyId(String);

impl AccessKeyId {
    /// Creates a new validated access key id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessKeyId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyAccessKeyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AccessKeyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated seller (merchant) id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SellerId(String);

impl SellerId {
    /// Creates a new validated seller id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySellerId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptySellerId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for SellerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated MWS auth token, granted by the seller to the developer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MwsAuthToken(String);

impl MwsAuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for MwsAuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated MWS secret key.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SecretKey(*****)` instead of the actual key, so the credential cannot
/// leak through logging of configuration values.
///
/// # Example
///
/// ```rust
/// use mws_sdk::SecretKey;
///
/// let secret = SecretKey::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}

/// A validated marketplace web service endpoint.
///
/// Accepts an absolute `https://` (or `http://`, for test servers) URI and
/// exposes both the full URI and the bare host used in the string to sign.
///
/// # Example
///
/// ```rust
/// use mws_sdk::MarketplaceEndpoint;
///
/// let endpoint = MarketplaceEndpoint::new("https://mws.amazonservices.com").unwrap();
/// assert_eq!(endpoint.uri(), "https://mws.amazonservices.com");
/// assert_eq!(endpoint.host(), "mws.amazonservices.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketplaceEndpoint {
    uri: String,
    host_start: usize,
}

impl MarketplaceEndpoint {
    /// Creates a new validated marketplace endpoint.
    ///
    /// Any trailing slash is trimmed so that resource paths can be appended
    /// uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URI has no scheme or
    /// no host.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into();
        let uri = uri.trim().trim_end_matches('/').to_string();

        let host_start = if let Some(rest) = uri.strip_prefix("https://") {
            if rest.is_empty() {
                return Err(ConfigError::InvalidEndpoint { endpoint: uri });
            }
            "https://".len()
        } else if let Some(rest) = uri.strip_prefix("http://") {
            if rest.is_empty() {
                return Err(ConfigError::InvalidEndpoint { endpoint: uri });
            }
            "http://".len()
        } else {
            return Err(ConfigError::InvalidEndpoint { endpoint: uri });
        };

        Ok(Self { uri, host_start })
    }

    /// Returns the full endpoint URI without a trailing slash.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the host (and port, if any) portion of the endpoint.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.uri[self.host_start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_key_id_rejects_empty() {
        assert!(matches!(
            AccessKeyId::new(""),
            Err(ConfigError::EmptyAccessKeyId)
        ));
    }

    #[test]
    fn test_seller_id_roundtrip() {
        let id = SellerId::new("A2EXAMPLE").unwrap();
        assert_eq!(id.as_ref(), "A2EXAMPLE");
    }

    #[test]
    fn test_secret_key_debug_is_masked() {
        let secret = SecretKey::new("super-secret").unwrap();
        let debug = format!("{secret:?}");
        assert_eq!(debug, "SecretKey(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_endpoint_extracts_host() {
        let endpoint = MarketplaceEndpoint::new("https://mws.amazonservices.ca").unwrap();
        assert_eq!(endpoint.host(), "mws.amazonservices.ca");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let endpoint = MarketplaceEndpoint::new("https://mws.amazonservices.com/").unwrap();
        assert_eq!(endpoint.uri(), "https://mws.amazonservices.com");
    }

    #[test]
    fn test_endpoint_accepts_http_for_test_servers() {
        let endpoint = MarketplaceEndpoint::new("http://127.0.0.1:9090").unwrap();
        assert_eq!(endpoint.host(), "127.0.0.1:9090");
    }

    #[test]
    fn test_endpoint_rejects_missing_scheme() {
        assert!(matches!(
            MarketplaceEndpoint::new("mws.amazonservices.com"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_endpoint_rejects_bare_scheme() {
        assert!(matches!(
            MarketplaceEndpoint::new("https://"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }
}
