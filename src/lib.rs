//! # mws-sdk
//!
//! A typed client for the Amazon Marketplace Web Service (MWS) seller
//! APIs. Requests are signed with HMAC-SHA256 over a deterministic
//! canonical query string; responses are parsed from XML into an untyped
//! tree and decoded into validated typed values with precise diagnostics
//! on any shape mismatch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mws_sdk::config::{
//!     AccessKeyId, MarketplaceEndpoint, MwsAuthToken, MwsConfig, SecretKey, SellerId,
//! };
//! use mws_sdk::{HttpClient, Mws};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MwsConfig::builder()
//!     .access_key_id(AccessKeyId::new("AKIA...")?)
//!     .seller_id(SellerId::new("A2EXAMPLE")?)
//!     .auth_token(MwsAuthToken::new("amzn.mws.example")?)
//!     .secret_key(SecretKey::new("...")?)
//!     .endpoint(MarketplaceEndpoint::new("https://mws.amazonservices.com")?)
//!     .build()?;
//!
//! let mws = Mws::new(HttpClient::new(config));
//! let (status, meta) = mws.orders().get_service_status().await?;
//! println!("Orders API is {} (request {:?})", status.status, meta.request_id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! - Every operation returns `Result<(T, RequestMeta), MwsError>`: the
//!   decoded value paired with the response's diagnostic metadata.
//! - Decoding is result-typed end to end; a payload mismatch surfaces as a
//!   single [`error::MwsError::Parsing`] carrying the first mismatch found.
//! - No retries, no rate limiting: quota figures in
//!   [`client::RequestMeta`] are reported, never enforced.
//! - The transport is an injected capability ([`client::Transport`]), so
//!   tests substitute a double per-instance.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod sections;

pub use client::{HttpClient, Parameters, RequestMeta};
pub use config::{
    AccessKeyId, MarketplaceEndpoint, MwsAuthToken, MwsConfig, SecretKey, SellerId,
};
pub use decode::NextToken;
pub use error::{ConfigError, MwsError, ParsingError};
pub use sections::Mws;
