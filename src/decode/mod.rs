//! Decode and validation framework for untyped response documents.
//!
//! MWS responses arrive as XML and are parsed into an untyped
//! [`serde_json::Value`] tree before any typed model exists. The helpers in
//! this module validate and transform that tree: primitives ([`string`],
//! [`number`], [`boolean`], [`datetime`], [`enumeration`]) and combinators
//! ([`field`], [`optional_field`], [`ensure_array`], [`one_of`]).
//!
//! A decoder is any `Fn(&Value) -> DecodeResult<T>`; section modules compose
//! them with plain closures. Decoding never panics and never partially
//! succeeds: the outcome is always a value or a [`DecodeError`] describing
//! the first mismatch, including what was expected, a rendering of what was
//! actually received, and a property/index path locating the failure.
//!
//! # Example
//!
//! ```rust
//! use mws_sdk::decode::{self, DecodeResult};
//! use serde_json::json;
//!
//! let value = json!({ "Name": "a", "Value": "b" });
//! let obj = decode::object(&value).unwrap();
//! let name: String = decode::field(obj, "Name", decode::string).unwrap();
//! assert_eq!(name, "a");
//!
//! let failure = decode::object(&json!("")).unwrap_err();
//! assert_eq!(
//!     failure.to_string(),
//!     "Expected an object, but received a string with value \"\""
//! );
//! ```

mod token;

pub use token::{next_token, NextToken};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use thiserror::Error;

/// A decode failure: the payload did not match the expected shape.
///
/// Carried as a value through the framework; converted to a
/// [`ParsingError`](crate::error::ParsingError) exactly once at the public
/// boundary of each section operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeError(String);

impl DecodeError {
    /// Creates a decode error with the given diagnostic message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The two-branch outcome of every decoder.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Renders a received value for diagnostics, e.g. `a string with value ""`.
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("a boolean with value {b}"),
        Value::Number(n) => format!("a number with value {n}"),
        Value::String(_) => format!("a string with value {value}"),
        Value::Array(_) => format!("an array with value {value}"),
        Value::Object(_) => format!("an object with value {value}"),
    }
}

fn mismatch(expected: &str, received: &Value) -> DecodeError {
    DecodeError(format!(
        "Expected {expected}, but received {}",
        describe(received)
    ))
}

/// Decodes a JSON string.
///
/// # Errors
///
/// Fails on any non-string value.
pub fn string(value: &Value) -> DecodeResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(mismatch("a string", other)),
    }
}

/// Decodes a string, coercing scalar values (numbers, booleans) to text.
///
/// XML-derived payloads coerce numeric-looking text into numbers during
/// parsing, so identifier fields that merely happen to be digits must be
/// decoded with this instead of [`string`].
///
/// # Errors
///
/// Fails on arrays, objects and null.
pub fn ensure_string(value: &Value) -> DecodeResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(mismatch("a string or a scalar", other)),
    }
}

/// Decodes a number as `f64`, coercing numeric text.
///
/// The XML tree builder only converts text to a number when the conversion
/// round-trips exactly, so amounts such as `"10.00"` still arrive as
/// strings and are coerced here.
///
/// # Errors
///
/// Fails on non-numeric values and non-numeric text.
pub fn number(value: &Value) -> DecodeResult<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| mismatch("a number", value)),
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|_| mismatch("a number", value)),
        other => Err(mismatch("a number", other)),
    }
}

/// Decodes an integer, rejecting fractional numbers.
///
/// # Errors
///
/// Fails on non-integer values.
pub fn integer(value: &Value) -> DecodeResult<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| mismatch("an integer", value)),
        other => Err(mismatch("an integer", other)),
    }
}

/// Decodes an integer, coercing numeric text such as `"42"`.
///
/// # Errors
///
/// Fails on fractional numbers and non-numeric text.
pub fn ensure_int(value: &Value) -> DecodeResult<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| mismatch("an integer or an integer string", value)),
        Value::String(s) => s
            .parse::<i64>()
            .map_err(|_| mismatch("an integer or an integer string", value)),
        other => Err(mismatch("an integer or an integer string", other)),
    }
}

/// Decodes a boolean.
///
/// # Errors
///
/// Fails on any non-boolean value.
pub fn boolean(value: &Value) -> DecodeResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(mismatch("a boolean", other)),
    }
}

/// Decodes an ISO 8601 timestamp into a UTC datetime.
///
/// Accepts RFC 3339 strings with or without fractional seconds, plus the
/// zone-less variant MWS occasionally emits (interpreted as UTC).
///
/// # Errors
///
/// Fails on non-string values and unparseable date text.
pub fn datetime(value: &Value) -> DecodeResult<DateTime<Utc>> {
    let text = string(value)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed.and_utc());
    }
    Err(mismatch("an ISO 8601 date string", value))
}

/// Accepts any value unchanged.
///
/// Used for fields whose shape the service provider leaves undocumented.
///
/// # Errors
///
/// Never fails; the signature matches the other decoders for composability.
pub fn unknown(value: &Value) -> DecodeResult<Value> {
    Ok(value.clone())
}

/// Asserts the value is an object and returns its property map.
///
/// # Errors
///
/// Fails on any non-object value, e.g. decoding `""` yields
/// `Expected an object, but received a string with value ""`.
pub fn object(value: &Value) -> DecodeResult<&Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(mismatch("an object", other)),
    }
}

/// Decodes a required property of an object.
///
/// Failures (missing key or inner decoder failure) are reported as
/// `Problem with the value of property "name": ...` so nested mismatches
/// carry their full path.
///
/// # Errors
///
/// Fails if the property is absent or the inner decoder fails.
pub fn field<T, F>(object: &Map<String, Value>, name: &str, decoder: F) -> DecodeResult<T>
where
    F: FnOnce(&Value) -> DecodeResult<T>,
{
    let value = object.get(name).ok_or_else(|| {
        DecodeError(format!(
            "Problem with the value of property \"{name}\": it does not exist"
        ))
    })?;
    decoder(value).map_err(|error| {
        DecodeError(format!(
            "Problem with the value of property \"{name}\": {error}"
        ))
    })
}

/// Decodes an optional property of an object.
///
/// An absent property yields `None` rather than failing; a present property
/// delegates to the inner decoder and fails if it fails.
///
/// # Errors
///
/// Fails only when the property is present and the inner decoder fails.
pub fn optional_field<T, F>(
    object: &Map<String, Value>,
    name: &str,
    decoder: F,
) -> DecodeResult<Option<T>>
where
    F: FnOnce(&Value) -> DecodeResult<T>,
{
    match object.get(name) {
        None => Ok(None),
        Some(value) => decoder(value).map(Some).map_err(|error| {
            DecodeError(format!(
                "Problem with the value of property \"{name}\": {error}"
            ))
        }),
    }
}

/// Normalizes the XML one-vs-many conflation into a sequence.
///
/// XML-derived payloads represent "a list of X under a wrapper element" as
/// either a single object (one child), a sequence (several children), or an
/// empty scalar (no children). Given the wrapper's raw value, this yields a
/// uniform `Vec`:
///
/// - a single object under `wrapper_key` becomes a one-element vec,
/// - a sequence under `wrapper_key` is decoded element-wise,
/// - an absent key or empty scalar yields an empty vec.
///
/// # Errors
///
/// Fails if an element fails to decode (index-tagged) or the raw value is
/// not a wrapper object or empty scalar.
pub fn ensure_array<T, F>(value: &Value, wrapper_key: &str, decoder: F) -> DecodeResult<Vec<T>>
where
    F: Fn(&Value) -> DecodeResult<T>,
{
    let at_index = |index: usize, error: DecodeError| {
        DecodeError(format!("Problem with the value at index {index}: {error}"))
    };
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        Value::Object(map) => match map.get(wrapper_key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| decoder(item).map_err(|error| at_index(index, error)))
                .collect(),
            Some(single) => Ok(vec![decoder(single).map_err(|error| at_index(0, error))?]),
        },
        other => Err(mismatch(
            &format!("an object wrapping \"{wrapper_key}\""),
            other,
        )),
    }
}

/// Tries each decoder in order, succeeding with the first success.
///
/// Used where the upstream service is inconsistent about field shapes
/// across documented versus observed payloads.
///
/// # Errors
///
/// Fails only if every decoder fails, aggregating all branch diagnostics.
pub fn one_of<T>(
    value: &Value,
    decoders: &[&dyn Fn(&Value) -> DecodeResult<T>],
) -> DecodeResult<T> {
    let mut problems = Vec::with_capacity(decoders.len());
    for decoder in decoders {
        match decoder(value) {
            Ok(decoded) => return Ok(decoded),
            Err(error) => problems.push(error.to_string()),
        }
    }
    let rendered = problems
        .iter()
        .enumerate()
        .map(|(index, problem)| format!("({index}) {problem}"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(DecodeError(format!(
        "One of the following problems occurred: {rendered}"
    )))
}

/// A closed set of accepted wire literals, decoded by exact membership.
///
/// Implemented via the [`wire_enum!`](crate::wire_enum) macro, which keeps
/// the canonical literal strings (hyphenated ones included) independent of
/// the variant's in-memory naming.
pub trait WireEnum: Sized + Copy {
    /// Every literal this enum accepts on the wire.
    const LITERALS: &'static [&'static str];

    /// Maps a wire literal to its variant, if the literal is in the set.
    fn from_wire(literal: &str) -> Option<Self>;

    /// Returns the canonical wire literal for this variant.
    fn as_wire(self) -> &'static str;
}

/// Decodes a text value restricted to a closed literal set.
///
/// # Errors
///
/// Fails unless the input text exactly matches one of the declared
/// literals; the diagnostic names both the accepted set and the received
/// value.
pub fn enumeration<T: WireEnum>(value: &Value) -> DecodeResult<T> {
    let literal = ensure_string(value)?;
    T::from_wire(&literal).ok_or_else(|| {
        DecodeError(format!(
            "Expected one of [{}], but received a string with value \"{literal}\"",
            T::LITERALS.join(", ")
        ))
    })
}

/// Declares an enum whose variants map one-to-one onto wire literals.
///
/// Generates the enum, a [`WireEnum`](crate::decode::WireEnum) impl,
/// `Display` as the wire literal, and serde serialization under the wire
/// name.
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, ::serde::Serialize)]
        $vis enum $name {
            $(
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $crate::decode::WireEnum for $name {
            const LITERALS: &'static [&'static str] = &[$($literal),+];

            fn from_wire(literal: &str) -> Option<Self> {
                match literal {
                    $($literal => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_wire(self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::decode::WireEnum::as_wire(*self))
            }
        }
    };
}
