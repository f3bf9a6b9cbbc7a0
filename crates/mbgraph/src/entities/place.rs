// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use uuid::Uuid;

use super::{Alias, Area, Genre, LifeSpan, Relationship, Tag, UserTag};
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// A venue, studio or other building where music is performed or recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub type_id: Option<Uuid>,
    pub address: Option<String>,
    pub area: Option<Area>,
    pub coordinates: Option<Coordinates>,
    pub life_span: Option<LifeSpan>,
    pub aliases: Vec<Alias>,
    pub annotation: Option<String>,
    pub tags: Vec<Tag>,
    pub user_tags: Vec<UserTag>,
    pub genres: Vec<Genre>,
    pub user_genres: Vec<Genre>,
    #[serde(rename = "relations")]
    pub relationships: Vec<Relationship>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl JsonObject for Coordinates {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut latitude = None;
        let mut longitude = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "latitude" => latitude = property.value()?,
                "longitude" => longitude = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Coordinates {
            latitude: required(latitude, "latitude")?,
            longitude: required(longitude, "longitude")?,
        })
    }
}

impl JsonObject for Place {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut name = None;
        let mut disambiguation = None;
        let mut type_name = None;
        let mut type_id = None;
        let mut address = None;
        let mut area = None;
        let mut coordinates = None;
        let mut life_span = None;
        let mut aliases = None;
        let mut annotation = None;
        let mut tags = None;
        let mut user_tags = None;
        let mut genres = None;
        let mut user_genres = None;
        let mut relationships = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "id" => id = property.value()?,
                "name" => name = property.value()?,
                "disambiguation" => disambiguation = property.value()?,
                "type" => type_name = property.value()?,
                "type-id" => type_id = property.value()?,
                "address" => address = property.value()?,
                "area" => area = property.value()?,
                "coordinates" => coordinates = property.value()?,
                "life-span" => life_span = property.value()?,
                "aliases" => aliases = property.list()?,
                "annotation" => annotation = property.value()?,
                "tags" => tags = property.list()?,
                "user-tags" => user_tags = property.list()?,
                "genres" => genres = property.list()?,
                "user-genres" => user_genres = property.list()?,
                "relations" => relationships = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Place {
            id: required(id, "id")?,
            name: required(name, "name")?,
            disambiguation,
            type_name,
            type_id,
            address,
            area,
            coordinates,
            life_span,
            aliases: aliases.unwrap_or_default(),
            annotation,
            tags: tags.unwrap_or_default(),
            user_tags: user_tags.unwrap_or_default(),
            genres: genres.unwrap_or_default(),
            user_genres: user_genres.unwrap_or_default(),
            relationships: relationships.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}
