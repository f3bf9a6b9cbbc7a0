// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use uuid::Uuid;

use crate::entity_type::EntityType;
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, Property, UnhandledProperties};

/// A user's collection of entities of a single kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub editor: Option<String>,
    /// Kind of entity the collection holds; `None` when the server sent a kind
    /// this crate does not know (the raw text stays in `unhandled`).
    pub entity_type: Option<EntityType>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub type_id: Option<Uuid>,
    /// Number of entities in the collection, taken from `<entity-type>-count`.
    pub item_count: Option<u32>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Collection {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut name = None;
        let mut editor = None;
        let mut entity_type: Option<String> = None;
        let mut type_name = None;
        let mut type_id = None;
        let mut counts: Vec<(EntityType, Property)> = Vec::new();
        while let Some(property) = properties.next_property() {
            match property.name() {
                "id" => id = property.value()?,
                "name" => name = property.value()?,
                "editor" => editor = property.value()?,
                "entity-type" => entity_type = property.value()?,
                "type" => type_name = property.value()?,
                "type-id" => type_id = property.value()?,
                other => match count_kind(other) {
                    Some(kind) => counts.push((kind, property)),
                    None => properties.unhandled(property),
                },
            }
        }

        let kind = match entity_type {
            Some(raw) => match EntityType::from_discriminator(&raw) {
                Some(kind) => Some(kind),
                None => {
                    properties.unhandled_value("entity-type", raw.into());
                    None
                }
            },
            None => None,
        };

        // Only the count matching the collection's entity type is meaningful;
        // anything else is an inconsistency and stays visible as unhandled.
        let mut item_count = None;
        for (count_kind, property) in counts {
            if Some(count_kind) == kind && item_count.is_none() {
                item_count = property.value()?;
            } else {
                properties.unhandled(property);
            }
        }

        Ok(Collection {
            id: required(id, "id")?,
            name: required(name, "name")?,
            editor,
            entity_type: kind,
            type_name,
            type_id,
            item_count,
            unhandled: properties.finish(),
        })
    }
}

fn count_kind(name: &str) -> Option<EntityType> {
    name.strip_suffix("-count")
        .and_then(EntityType::from_discriminator)
}
