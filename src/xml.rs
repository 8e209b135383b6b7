//! XML marshalling for management API payloads.
//!
//! Models describe their wire shape with serde attributes: `@name` fields
//! map to attributes, everything else to child elements in declaration
//! order, and `None` fields are skipped when writing. [`XmlEntity`] adds the
//! root element name so documents of the wrong kind are rejected before any
//! field mapping happens.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, SdkError};

/// A model that is the root of an XML document.
pub trait XmlEntity {
    /// Name of the document's root element.
    const ROOT: &'static str;
}

/// Serializes a model into an XML document without declaration.
pub fn encode<T>(value: &T) -> Result<String, SdkError>
where
    T: Serialize + XmlEntity,
{
    quick_xml::se::to_string_with_root(T::ROOT, value)
        .map_err(|e| SdkError::Serialization(format!("<{}>: {}", T::ROOT, e)))
}

/// Deserializes an XML document into a model.
///
/// # Errors
///
/// Returns a `DecodeError` if the document is not well-formed, has a
/// different root element, lacks a required field, or carries an unknown
/// enumeration token.
pub fn decode<T>(body: &str) -> Result<T, DecodeError>
where
    T: DeserializeOwned + XmlEntity,
{
    let root = root_element(body)?;
    if root != T::ROOT {
        return Err(DecodeError::new(format!(
            "expected <{}> root element, found <{}>",
            T::ROOT,
            root
        )));
    }

    quick_xml::de::from_str(body)
        .map_err(|e| DecodeError::new(format!("could not decode <{}>: {}", T::ROOT, e)))
}

/// Single-value result document, e.g. `<result value="true"/>`.
#[derive(Debug, Deserialize)]
struct ResultValue {
    #[serde(rename = "@value", default)]
    value: Option<String>,
}

impl XmlEntity for ResultValue {
    const ROOT: &'static str = "result";
}

/// Extracts the boolean carried by a single-value result document.
///
/// Only the exact literals `true` and `false` are accepted; anything else
/// (`True`, `1`, empty, missing) is a `DecodeError`.
pub fn extract_result_value(body: &str) -> Result<bool, DecodeError> {
    let result: ResultValue = decode(body)?;
    match result.value.as_deref() {
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(DecodeError::new(format!(
            "result value must be \"true\" or \"false\", got {:?}",
            other
        ))),
        None => Err(DecodeError::missing("result value attribute")),
    }
}

/// Returns the local name of the first element in the document.
fn root_element(body: &str) -> Result<String, DecodeError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) | Ok(Event::Empty(tag)) => {
                return Ok(String::from_utf8_lossy(tag.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(DecodeError::new("document has no root element")),
            Ok(_) => continue,
            Err(e) => return Err(DecodeError::new(format!("malformed XML: {}", e))),
        }
    }
}
