// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoding engine for MusicBrainz JSON documents.
//!
//! A response is parsed once into an insertion-ordered [`JsonValue`] tree and
//! then walked by one reader per target type. Object readers implement
//! [`JsonObject`] and pull properties from a [`Properties`] stream in the order
//! the server sent them; anything a reader does not recognise is moved into
//! the object's [`UnhandledProperties`] instead of being dropped.

mod primitives;
mod unhandled;

use std::collections::BTreeMap;

use serde_json::map::IntoIter;
use serde_json::Map;

use crate::error::{DecodeError, PathSegment};

pub use unhandled::{JsonValue, UnhandledProperties};

/// A type decoded from the properties of a single JSON object.
pub trait JsonObject: Sized {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError>;
}

/// A type decoded from any JSON value (scalars, objects, wrappers).
///
/// JSON `null` is handled by the caller: optional properties turn it into
/// `None` before `read_value` is reached.
pub trait ReadValue: Sized {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError>;
}

impl<T: JsonObject> ReadValue for T {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Object(map) => {
                let mut properties = Properties::new(map);
                T::read_object(&mut properties)
            }
            other => Err(DecodeError::unexpected("object", &other)),
        }
    }
}

/// Decodes a raw response body into `T`.
pub fn decode<T: ReadValue>(bytes: &[u8]) -> Result<T, DecodeError> {
    let value: JsonValue = serde_json::from_slice(bytes).map_err(DecodeError::syntax)?;
    T::read_value(value)
}

pub fn decode_str<T: ReadValue>(text: &str) -> Result<T, DecodeError> {
    decode(text.as_bytes())
}

/// Decodes an already parsed value, e.g. one built with `serde_json::json!`.
pub fn decode_value<T: ReadValue>(value: JsonValue) -> Result<T, DecodeError> {
    T::read_value(value)
}

/// The property stream of one JSON object.
pub struct Properties {
    entries: IntoIter,
    unhandled: UnhandledProperties,
}

impl Properties {
    pub(crate) fn new(map: Map<String, JsonValue>) -> Self {
        Self {
            entries: map.into_iter(),
            unhandled: UnhandledProperties::default(),
        }
    }

    pub fn next_property(&mut self) -> Option<Property> {
        self.entries
            .next()
            .map(|(name, value)| Property { name, value })
    }

    /// Keeps a property the reader does not model.
    pub fn unhandled(&mut self, property: Property) {
        self.unhandled.insert(property.name, property.value);
    }

    pub(crate) fn unhandled_value(&mut self, name: &str, value: JsonValue) {
        self.unhandled.insert(name.to_string(), value);
    }

    /// Hands over everything collected as unhandled; called once the object is complete.
    pub fn finish(&mut self) -> UnhandledProperties {
        std::mem::take(&mut self.unhandled)
    }
}

/// One name/value pair taken from a [`Properties`] stream.
#[derive(Debug)]
pub struct Property {
    name: String,
    value: JsonValue,
}

impl Property {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Decodes the value, mapping JSON `null` to `None`.
    pub fn value<T: ReadValue>(self) -> Result<Option<T>, DecodeError> {
        let Property { name, value } = self;
        if value.is_null() {
            return Ok(None);
        }
        T::read_value(value)
            .map(Some)
            .map_err(|error| error.within(PathSegment::Property(name)))
    }

    /// Decodes an array, keeping element order. `null` is `None`; `[]` is `Some(vec![])`.
    pub fn list<T: ReadValue>(self) -> Result<Option<Vec<T>>, DecodeError> {
        let Property { name, value } = self;
        if value.is_null() {
            return Ok(None);
        }
        read_list(value)
            .map(Some)
            .map_err(|error| error.within(PathSegment::Property(name)))
    }

    /// Decodes an object used as a string-keyed map.
    pub fn dictionary<T: ReadValue>(self) -> Result<Option<BTreeMap<String, T>>, DecodeError> {
        let Property { name, value } = self;
        if value.is_null() {
            return Ok(None);
        }
        read_dictionary(value)
            .map(Some)
            .map_err(|error| error.within(PathSegment::Property(name)))
    }

    pub fn into_parts(self) -> (String, JsonValue) {
        (self.name, self.value)
    }
}

pub fn read_list<T: ReadValue>(value: JsonValue) -> Result<Vec<T>, DecodeError> {
    match value {
        JsonValue::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                T::read_value(item).map_err(|error| error.within(PathSegment::Index(index)))
            })
            .collect(),
        other => Err(DecodeError::unexpected("array", &other)),
    }
}

/// Duplicate keys collapse during parsing, so the last value written wins.
pub fn read_dictionary<T: ReadValue>(value: JsonValue) -> Result<BTreeMap<String, T>, DecodeError> {
    match value {
        JsonValue::Object(map) => map
            .into_iter()
            .map(|(key, item)| match T::read_value(item) {
                Ok(decoded) => Ok((key, decoded)),
                Err(error) => Err(error.within(PathSegment::Property(key))),
            })
            .collect(),
        other => Err(DecodeError::unexpected("object", &other)),
    }
}

/// Fails with a Missing-Property error when a required field was absent or `null`.
pub fn required<T>(value: Option<T>, property: &str) -> Result<T, DecodeError> {
    value.ok_or_else(|| DecodeError::missing_property(property))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;
    use serde_json::json;

    #[derive(Debug)]
    struct Sample {
        id: u32,
        label: Option<String>,
        items: Vec<u32>,
        unhandled: UnhandledProperties,
    }

    impl JsonObject for Sample {
        fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
            let mut id = None;
            let mut label = None;
            let mut items = None;
            while let Some(property) = properties.next_property() {
                match property.name() {
                    "id" => id = property.value()?,
                    "label" | "legacy-label" => label = property.value()?,
                    "items" => items = property.list()?,
                    _ => properties.unhandled(property),
                }
            }
            Ok(Sample {
                id: required(id, "id")?,
                label,
                items: items.unwrap_or_default(),
                unhandled: properties.finish(),
            })
        }
    }

    #[test]
    fn test_dispatches_known_properties() {
        let sample: Sample = decode_value(json!({"id": 7, "label": "x", "items": [3, 1, 2]})).unwrap();
        assert_eq!(sample.id, 7);
        assert_eq!(sample.label.as_deref(), Some("x"));
        assert_eq!(sample.items, vec![3, 1, 2]);
        assert!(sample.unhandled.is_empty());
    }

    #[test]
    fn test_alternate_name_maps_to_same_field() {
        let sample: Sample = decode_value(json!({"id": 1, "legacy-label": "old"})).unwrap();
        assert_eq!(sample.label.as_deref(), Some("old"));
    }

    #[test]
    fn test_unknown_properties_kept_in_encounter_order() {
        let sample: Sample =
            decode_value(json!({"zeta": true, "id": 1, "alpha": [1, 2], "mid": {"a": null}}))
                .unwrap();
        let names: Vec<&str> = sample.unhandled.keys().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(sample.unhandled.get("alpha"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_null_required_property_is_missing() {
        let error = decode_value::<Sample>(json!({"id": null})).unwrap_err();
        assert!(error.is_missing_property("id"));
        assert_eq!(error.path(), "");
    }

    #[test]
    fn test_list_errors_carry_index() {
        let error = decode_value::<Sample>(json!({"id": 1, "items": [1, "two", 3]})).unwrap_err();
        assert_eq!(error.path(), "items[1]");
        assert!(matches!(
            error.kind(),
            DecodeErrorKind::UnexpectedType {
                expected: "integer",
                found: "string"
            }
        ));
    }

    #[test]
    fn test_list_order_for_empty_single_and_many() {
        for items in [json!([]), json!([5]), json!([9, 4, 7, 1])] {
            let expected: Vec<u32> = serde_json::from_value(items.clone()).unwrap();
            let sample: Sample = decode_value(json!({"id": 1, "items": items})).unwrap();
            assert_eq!(sample.items, expected);
        }
    }

    #[test]
    fn test_dictionary_last_write_wins() {
        let parsed: JsonValue = serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let map: BTreeMap<String, u32> = read_dictionary(parsed).unwrap();
        assert_eq!(map.get("a"), Some(&3));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_root_must_be_object() {
        let error = decode::<Sample>(b"null").unwrap_err();
        assert!(matches!(
            error.kind(),
            DecodeErrorKind::UnexpectedType {
                expected: "object",
                found: "null"
            }
        ));
    }

    #[test]
    fn test_syntax_error() {
        let error = decode::<Sample>(b"{\"id\": ").unwrap_err();
        assert!(matches!(error.kind(), DecodeErrorKind::Syntax(_)));
    }
}
