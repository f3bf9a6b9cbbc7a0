// SPDX-License-Identifier: GPL-3.0-or-later

//! Root documents that are not a single entity or a result window.

use serde::Serialize;

use crate::entities::{CdStub, Disc, Recording, Release};
use crate::error::DecodeError;
use crate::json::{
    decode_value, required, JsonObject, JsonValue, Properties, ReadValue, UnhandledProperties,
};
use crate::paging::BrowsePage;

/// Body the server sends with 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub help: Option<String>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl ErrorBody {
    pub fn message(&self) -> String {
        match &self.help {
            Some(help) => format!("{} ({})", self.error, help),
            None => self.error.clone(),
        }
    }
}

impl JsonObject for ErrorBody {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut error = None;
        let mut help = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "error" => error = property.value()?,
                "help" => help = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(ErrorBody {
            error: required(error, "error")?,
            help,
            unhandled: properties.finish(),
        })
    }
}

/// Result of `/discid/<id>`, whose shape depends on what matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiscIdLookup {
    /// The disc ID is known and attached to releases.
    Disc(Disc),
    /// Only an anonymous CD stub exists for the disc ID.
    Stub(CdStub),
    /// Fuzzy table-of-contents match.
    Releases(BrowsePage<Release>),
}

impl ReadValue for DiscIdLookup {
    fn read_value(value: JsonValue) -> Result<Self, DecodeError> {
        let JsonValue::Object(map) = &value else {
            return Err(DecodeError::unexpected("object", &value));
        };
        if map.contains_key("release-count") {
            return Ok(DiscIdLookup::Releases(decode_value(value)?));
        }
        let is_disc = map.contains_key("offsets") || map.contains_key("sectors");
        if !is_disc && map.contains_key("title") {
            return Ok(DiscIdLookup::Stub(decode_value(value)?));
        }
        Ok(DiscIdLookup::Disc(decode_value(value)?))
    }
}

/// Result of `/isrc/<isrc>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsrcLookup {
    pub isrc: String,
    pub recordings: Vec<Recording>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for IsrcLookup {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut isrc = None;
        let mut recordings = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "isrc" => isrc = property.value()?,
                "recordings" => recordings = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(IsrcLookup {
            isrc: required(isrc, "isrc")?,
            recordings: recordings.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = decode_value(json!({
            "error": "Invalid mbid.",
            "help": "For usage, please see: https://musicbrainz.org/development/mmd"
        }))
        .unwrap();
        assert_eq!(
            body.message(),
            "Invalid mbid. (For usage, please see: https://musicbrainz.org/development/mmd)"
        );
        assert!(body.unhandled.is_empty());
    }

    #[test]
    fn test_error_body_keeps_extra_fields() {
        let body: ErrorBody = decode_value(json!({
            "error": "Your requests are exceeding the allowable rate limit.",
            "retry-after": 2
        }))
        .unwrap();
        assert_eq!(body.help, None);
        assert_eq!(body.unhandled.get("retry-after"), Some(&json!(2)));
        assert_eq!(
            body.message(),
            "Your requests are exceeding the allowable rate limit."
        );
    }

    #[test]
    fn test_discid_shapes() {
        let disc: DiscIdLookup = decode_value(json!({
            "id": "I5l9cCSFccLKFEKS.7wqSZAorPU-",
            "offset-count": 2,
            "sectors": 95462,
            "offsets": [150, 17510],
            "releases": []
        }))
        .unwrap();
        assert!(matches!(disc, DiscIdLookup::Disc(_)));

        let stub: DiscIdLookup = decode_value(json!({
            "id": "lwHl8fGzJyLXQR33ug60E8jhf4k-",
            "title": "Doo Wop",
            "track-count": 0,
            "tracks": []
        }))
        .unwrap();
        assert!(matches!(stub, DiscIdLookup::Stub(_)));

        let releases: DiscIdLookup = decode_value(json!({
            "release-count": 0,
            "release-offset": 0,
            "releases": []
        }))
        .unwrap();
        assert!(matches!(releases, DiscIdLookup::Releases(page) if page.count == 0));
    }

    #[test]
    fn test_isrc_lookup() {
        let lookup: IsrcLookup = decode_value(json!({
            "isrc": "GBAYE9700115",
            "recordings": [
                {"id": "e5a3f0c4-1fae-4f2e-8f76-0c3b4f1e4fa6", "title": "Paranoid Android"}
            ]
        }))
        .unwrap();
        assert_eq!(lookup.recordings.len(), 1);
    }
}
