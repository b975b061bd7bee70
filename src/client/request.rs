//! Request-side types: HTTP method, the parameter set, and the wire request
//! handed to the transport.

use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::decode::NextToken;

/// HTTP methods supported by the MWS protocol.
///
/// Read operations place all parameters in the URL query string; write
/// operations send them as a form-encoded body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET: parameters travel in the query string.
    Get,
    /// HTTP POST: parameters travel in the request body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Uppercase: this rendering is part of the string to sign.
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// The API resource groups this SDK can address.
///
/// Each maps to a path segment of the marketplace endpoint and owns its own
/// API version string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Seller account and marketplace participation data.
    Sellers,
    /// Order listings and details.
    Orders,
    /// Financial event groups and events.
    Finances,
    /// Report requests and downloads.
    Reports,
    /// Inbound (fulfillment network) shipments.
    FulfillmentInboundShipment,
    /// Seller-shipped label purchasing.
    MerchantFulfillment,
    /// Push notification subscriptions.
    Subscriptions,
}

impl Resource {
    /// Returns the path segment for this resource.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sellers => "Sellers",
            Self::Orders => "Orders",
            Self::Finances => "Finances",
            Self::Reports => "Reports",
            Self::FulfillmentInboundShipment => "FulfillmentInboundShipment",
            Self::MerchantFulfillment => "MerchantFulfillment",
            Self::Subscriptions => "Subscriptions",
        }
    }
}

/// A parameter's value: a single text value or an ordered list of them.
///
/// List values are flattened into repeated `name=value` pairs during
/// canonicalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterValue {
    /// A single text value (an empty string is a real value and is kept).
    Single(String),
    /// An ordered sequence of text values for a repeated parameter.
    Many(Vec<String>),
}

/// An insertion-order-irrelevant mapping from parameter names to values.
///
/// Absent values never enter the set: the `insert_opt*` methods skip
/// `None`, which is how "absent" stays distinct from "empty string".
///
/// # Example
///
/// ```rust
/// use mws_sdk::Parameters;
///
/// let mut parameters = Parameters::new();
/// parameters.insert("BuyerEmail", "buyer@example.com");
/// parameters.insert_opt("SellerOrderId", None::<String>);
/// parameters.insert_list("MarketplaceId.Id", ["ATVPDKIKX0DER".to_string()]);
/// assert_eq!(parameters.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<String, ParameterValue>);

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a single-valued parameter, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0
            .insert(name.into(), ParameterValue::Single(value.into()));
    }

    /// Inserts a single-valued parameter when the value is present.
    pub fn insert_opt(&mut self, name: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    /// Inserts a list-valued parameter.
    pub fn insert_list<I, V>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.0.insert(
            name.into(),
            ParameterValue::Many(values.into_iter().map(Into::into).collect()),
        );
    }

    /// Inserts a list-valued parameter when the list is present.
    pub fn insert_opt_list<I, V>(&mut self, name: impl Into<String>, values: Option<I>)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        if let Some(values) = values {
            self.insert_list(name, values);
        }
    }

    /// Inserts a continuation token under the `NextToken` parameter.
    pub fn insert_next_token(&mut self, token: &NextToken) {
        self.insert("NextToken", token.encoded());
    }

    /// Merges another parameter set into this one; entries from `other`
    /// replace same-named entries here.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }

    /// Iterates over the entries in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParameterValue> {
        self.0.iter()
    }

    /// Returns the number of parameters in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a ParameterValue);
    type IntoIter = btree_map::Iter<'a, String, ParameterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A fully built wire request, ready for the transport.
///
/// Built once per call and never reused.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute URL, including the signed query string for GET.
    pub url: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// The signed form-encoded body for POST; `None` for GET.
    pub body: Option<String>,
}
