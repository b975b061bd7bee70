//! Canonical parameter serialization and request signing.
//!
//! Every request is authenticated by an HMAC-SHA256 signature computed over
//! a deterministic, byte-exact canonical query string. Determinism is
//! load-bearing: the same parameter set must always serialize identically,
//! regardless of insertion order, or the signature will not verify.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::client::request::{HttpMethod, ParameterValue, Parameters};
use crate::config::SecretKey;

type HmacSha256 = Hmac<Sha256>;

/// Serializes a parameter set into its canonical query string.
///
/// List-valued entries flatten into repeated `name=value` pairs; every key
/// and value is percent-encoded per RFC 3986 (a space becomes `%20`, never
/// `+`); pairs are sorted lexicographically by encoded key then encoded
/// value and joined with `&`.
///
/// Pure function: identical keys and values always yield byte-identical
/// output. An empty set yields an empty string; an empty-string value is
/// preserved as `key=`.
#[must_use]
pub fn canonicalize(parameters: &Parameters) -> String {
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (name, value) in parameters {
        let encoded_name = urlencoding::encode(name).into_owned();
        match value {
            ParameterValue::Single(single) => {
                pairs.push((encoded_name, urlencoding::encode(single).into_owned()));
            }
            ParameterValue::Many(many) => {
                for item in many {
                    pairs.push((
                        encoded_name.clone(),
                        urlencoding::encode(item).into_owned(),
                    ));
                }
            }
        }
    }
    pairs.sort();
    pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the string to sign for a request.
///
/// Format: `METHOD\nHOST\nPATH\nCANONICAL_QUERY_STRING`, built fresh per
/// request.
#[must_use]
pub fn string_to_sign(
    method: HttpMethod,
    host: &str,
    path: &str,
    canonical_query: &str,
) -> String {
    format!("{method}\n{host}\n{path}\n{canonical_query}")
}

/// Computes the base64-encoded HMAC-SHA256 signature of a string to sign.
///
/// Deterministic given identical inputs; no side effects. The secret key is
/// neither logged nor retained beyond the call.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn sign(string_to_sign: &str, secret: &SecretKey) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_ref().as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(string_to_sign.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}
