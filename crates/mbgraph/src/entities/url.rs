// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use uuid::Uuid;

use super::Relationship;
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// An external link known to MusicBrainz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Url {
    pub id: Uuid,
    pub resource: ::url::Url,
    #[serde(rename = "relations")]
    pub relationships: Vec<Relationship>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Url {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut resource = None;
        let mut relationships = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "id" => id = property.value()?,
                "resource" => resource = property.value()?,
                "relations" => relationships = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Url {
            id: required(id, "id")?,
            resource: required(resource, "resource")?,
            relationships: relationships.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}
