//! XML wire bodies parsed into untyped document trees.
//!
//! The decoders in [`crate::decode`] operate on a `serde_json::Value` tree
//! with the shape conventional XML-to-map parsers produce: one key per
//! child element, repeated siblings collected into an array, attributes
//! ignored, and leaf text coerced to a scalar. The one-child versus
//! many-children conflation this creates is what
//! [`ensure_array`](crate::decode::ensure_array) normalizes away.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::ParsingError;

/// An element under construction.
#[derive(Default)]
struct Element {
    children: Map<String, Value>,
    text: String,
}

impl Element {
    fn into_value(self) -> Value {
        if self.children.is_empty() {
            coerce_scalar(self.text)
        } else {
            // Mixed content: child elements win, interleaved text is dropped.
            Value::Object(self.children)
        }
    }
}

/// Parses a wire-format body into an untyped document tree.
///
/// An empty (or whitespace-only) body yields the body itself as a string
/// value, so the decode layer reports the standard
/// `Expected an object, but received a string with value ""` diagnostic.
///
/// # Errors
///
/// Returns a [`ParsingError`] when the body is not well-formed XML.
pub(crate) fn parse_document(body: &str) -> Result<Value, ParsingError> {
    if body.trim().is_empty() {
        return Ok(Value::String(body.trim().to_string()));
    }

    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    // Bottom of the stack is a virtual root holding the document element(s).
    let mut stack: Vec<(String, Element)> = vec![(String::new(), Element::default())];

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                stack.push((name, Element::default()));
            }
            Ok(Event::Empty(empty)) => {
                let name = String::from_utf8_lossy(empty.name().as_ref()).into_owned();
                if let Some((_, parent)) = stack.last_mut() {
                    insert_child(&mut parent.children, name, Value::String(String::new()));
                }
            }
            Ok(Event::Text(text)) => {
                let unescaped = text
                    .unescape()
                    .map_err(|error| invalid_document(&error.to_string()))?;
                if let Some((_, element)) = stack.last_mut() {
                    element.text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(cdata)) => {
                if let Some((_, element)) = stack.last_mut() {
                    element.text.push_str(&String::from_utf8_lossy(&cdata));
                }
            }
            Ok(Event::End(_)) => {
                let Some((name, element)) = stack.pop() else {
                    return Err(invalid_document("unexpected closing tag"));
                };
                let value = element.into_value();
                match stack.last_mut() {
                    Some((_, parent)) => insert_child(&mut parent.children, name, value),
                    None => return Err(invalid_document("unexpected closing tag")),
                }
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, processing instructions, doctypes
            Ok(_) => {}
            Err(error) => return Err(invalid_document(&error.to_string())),
        }
    }

    let (_, root) = stack.pop().unwrap_or_default();
    if !stack.is_empty() {
        return Err(invalid_document("unclosed element"));
    }
    Ok(root.into_value())
}

fn invalid_document(detail: &str) -> ParsingError {
    ParsingError(format!("Invalid XML document: {detail}"))
}

/// Inserts a child value, promoting repeated siblings into an array.
fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        None => {
            children.insert(name, value);
        }
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
    }
}

/// Coerces leaf text into a scalar, only when the conversion round-trips
/// exactly (so `"01234"` keeps its leading zero).
fn coerce_scalar(text: String) -> Value {
    match text.as_str() {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(parsed) = text.parse::<i64>() {
        if parsed.to_string() == text {
            return Value::Number(parsed.into());
        }
    }
    if let Ok(parsed) = text.parse::<f64>() {
        if parsed.to_string() == text {
            if let Some(number) = serde_json::Number::from_f64(parsed) {
                return Value::Number(number);
            }
        }
    }
    Value::String(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_is_an_empty_string_value() {
        assert_eq!(parse_document("").unwrap(), json!(""));
        assert_eq!(parse_document("  \n").unwrap(), json!(""));
    }

    #[test]
    fn test_nested_elements_become_objects() {
        let document = parse_document("<A><B>text</B></A>").unwrap();
        assert_eq!(document, json!({ "A": { "B": "text" } }));
    }

    #[test]
    fn test_repeated_siblings_become_an_array() {
        let document = parse_document("<Orders><Order>1</Order><Order>2</Order></Orders>").unwrap();
        assert_eq!(document, json!({ "Orders": { "Order": [1, 2] } }));
    }

    #[test]
    fn test_single_child_stays_an_object() {
        let document =
            parse_document("<Orders><Order><Id>x</Id></Order></Orders>").unwrap();
        assert_eq!(document, json!({ "Orders": { "Order": { "Id": "x" } } }));
    }

    #[test]
    fn test_empty_elements_are_empty_strings() {
        assert_eq!(parse_document("<A></A>").unwrap(), json!({ "A": "" }));
        assert_eq!(parse_document("<A/>").unwrap(), json!({ "A": "" }));
    }

    #[test]
    fn test_scalar_coercion() {
        let document = parse_document(
            "<R><N>42</N><F>1.5</F><B>true</B><S>abc</S></R>",
        )
        .unwrap();
        assert_eq!(
            document,
            json!({ "R": { "N": 42, "F": 1.5, "B": true, "S": "abc" } })
        );
    }

    #[test]
    fn test_non_round_tripping_numbers_stay_text() {
        let document = parse_document("<R><Zip>01234</Zip><Amount>10.00</Amount></R>").unwrap();
        assert_eq!(
            document,
            json!({ "R": { "Zip": "01234", "Amount": "10.00" } })
        );
    }

    #[test]
    fn test_attributes_are_ignored() {
        let document = parse_document(r#"<A xmlns="urn:x"><B attr="1">v</B></A>"#).unwrap();
        assert_eq!(document, json!({ "A": { "B": "v" } }));
    }

    #[test]
    fn test_entities_are_unescaped() {
        let document = parse_document("<A>a &amp; b</A>").unwrap();
        assert_eq!(document, json!({ "A": "a & b" }));
    }

    #[test]
    fn test_malformed_xml_is_a_parsing_error() {
        let error = parse_document("<A><B></A>").unwrap_err();
        assert!(error.to_string().starts_with("Invalid XML document:"));
    }

    #[test]
    fn test_realistic_envelope() {
        let body = r#"<?xml version="1.0"?>
            <GetServiceStatusResponse>
              <GetServiceStatusResult>
                <Status>GREEN</Status>
                <Timestamp>2020-05-06T08:22:23.582Z</Timestamp>
              </GetServiceStatusResult>
              <ResponseMetadata>
                <RequestId>d384713e-7da2-441b-9b10-a6b331900632</RequestId>
              </ResponseMetadata>
            </GetServiceStatusResponse>"#;
        let document = parse_document(body).unwrap();
        assert_eq!(
            document["GetServiceStatusResponse"]["GetServiceStatusResult"]["Status"],
            json!("GREEN")
        );
        assert_eq!(
            document["GetServiceStatusResponse"]["ResponseMetadata"]["RequestId"],
            json!("d384713e-7da2-441b-9b10-a6b331900632")
        );
    }
}
