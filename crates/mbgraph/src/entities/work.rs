// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use uuid::Uuid;

use super::{Alias, Genre, Rating, Relationship, Tag, UserRating, UserTag};
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// A distinct intellectual or artistic creation: a song, a symphony, a libretto.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Work {
    pub id: Uuid,
    pub title: String,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub type_id: Option<Uuid>,
    /// Main lyrics language (ISO 639-3), superseded by `languages`.
    pub language: Option<String>,
    pub languages: Vec<String>,
    pub iswcs: Vec<String>,
    pub attributes: Vec<WorkAttribute>,
    pub aliases: Vec<Alias>,
    pub annotation: Option<String>,
    pub tags: Vec<Tag>,
    pub user_tags: Vec<UserTag>,
    pub genres: Vec<Genre>,
    pub user_genres: Vec<Genre>,
    pub rating: Option<Rating>,
    pub user_rating: Option<UserRating>,
    #[serde(rename = "relations")]
    pub relationships: Vec<Relationship>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Work {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut title = None;
        let mut disambiguation = None;
        let mut type_name = None;
        let mut type_id = None;
        let mut language = None;
        let mut languages = None;
        let mut iswcs = None;
        let mut attributes = None;
        let mut aliases = None;
        let mut annotation = None;
        let mut tags = None;
        let mut user_tags = None;
        let mut genres = None;
        let mut user_genres = None;
        let mut rating = None;
        let mut user_rating = None;
        let mut relationships = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "id" => id = property.value()?,
                "title" => title = property.value()?,
                "disambiguation" => disambiguation = property.value()?,
                "type" => type_name = property.value()?,
                "type-id" => type_id = property.value()?,
                "language" => language = property.value()?,
                "languages" => languages = property.list()?,
                "iswcs" => iswcs = property.list()?,
                "attributes" => attributes = property.list()?,
                "aliases" => aliases = property.list()?,
                "annotation" => annotation = property.value()?,
                "tags" => tags = property.list()?,
                "user-tags" => user_tags = property.list()?,
                "genres" => genres = property.list()?,
                "user-genres" => user_genres = property.list()?,
                "rating" => rating = property.value()?,
                "user-rating" => user_rating = property.value()?,
                "relations" => relationships = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Work {
            id: required(id, "id")?,
            title: required(title, "title")?,
            disambiguation,
            type_name,
            type_id,
            language,
            languages: languages.unwrap_or_default(),
            iswcs: iswcs.unwrap_or_default(),
            attributes: attributes.unwrap_or_default(),
            aliases: aliases.unwrap_or_default(),
            annotation,
            tags: tags.unwrap_or_default(),
            user_tags: user_tags.unwrap_or_default(),
            genres: genres.unwrap_or_default(),
            user_genres: user_genres.unwrap_or_default(),
            rating,
            user_rating,
            relationships: relationships.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}

/// A typed work attribute such as a key or a catalogue number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkAttribute {
    #[serde(rename = "type")]
    pub type_name: String,
    pub type_id: Option<Uuid>,
    pub value: Option<String>,
    pub value_id: Option<Uuid>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for WorkAttribute {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut type_name = None;
        let mut type_id = None;
        let mut value = None;
        let mut value_id = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "type" => type_name = property.value()?,
                "type-id" => type_id = property.value()?,
                "value" => value = property.value()?,
                "value-id" => value_id = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(WorkAttribute {
            type_name: required(type_name, "type")?,
            type_id,
            value,
            value_id,
            unhandled: properties.finish(),
        })
    }
}
