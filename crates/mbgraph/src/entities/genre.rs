// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use uuid::Uuid;

use super::Alias;
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// A genre, either looked up directly or listed on another entity with a vote count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
    pub disambiguation: Option<String>,
    /// Votes for this genre on the entity that lists it.
    pub count: Option<i32>,
    pub aliases: Vec<Alias>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Genre {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut name = None;
        let mut disambiguation = None;
        let mut count = None;
        let mut aliases = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "id" => id = property.value()?,
                "name" => name = property.value()?,
                "disambiguation" => disambiguation = property.value()?,
                "count" => count = property.value()?,
                "aliases" => aliases = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Genre {
            id: required(id, "id")?,
            name: required(name, "name")?,
            disambiguation,
            count,
            aliases: aliases.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}
