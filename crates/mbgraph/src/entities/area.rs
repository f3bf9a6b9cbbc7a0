// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use uuid::Uuid;

use super::{Alias, Genre, LifeSpan, Relationship, Tag, UserTag};
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// A geographic region or settlement (country, subdivision, city, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Area {
    pub id: Uuid,
    pub name: String,
    pub sort_name: Option<String>,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub type_id: Option<Uuid>,
    #[serde(rename = "iso-3166-1-codes")]
    pub iso_3166_1_codes: Vec<String>,
    #[serde(rename = "iso-3166-2-codes")]
    pub iso_3166_2_codes: Vec<String>,
    #[serde(rename = "iso-3166-3-codes")]
    pub iso_3166_3_codes: Vec<String>,
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

impl JsonObject for Area {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut name = None;
        let mut sort_name = None;
        let mut disambiguation = None;
        let mut type_name = None;
        let mut type_id = None;
        let mut iso_3166_1_codes = None;
        let mut iso_3166_2_codes = None;
        let mut iso_3166_3_codes = None;
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
                "sort-name" => sort_name = property.value()?,
                "disambiguation" => disambiguation = property.value()?,
                "type" => type_name = property.value()?,
                "type-id" => type_id = property.value()?,
                "iso-3166-1-codes" | "iso_3166_1_codes" => iso_3166_1_codes = property.list()?,
                "iso-3166-2-codes" | "iso_3166_2_codes" => iso_3166_2_codes = property.list()?,
                "iso-3166-3-codes" | "iso_3166_3_codes" => iso_3166_3_codes = property.list()?,
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
        Ok(Area {
            id: required(id, "id")?,
            name: required(name, "name")?,
            sort_name,
            disambiguation,
            type_name,
            type_id,
            iso_3166_1_codes: iso_3166_1_codes.unwrap_or_default(),
            iso_3166_2_codes: iso_3166_2_codes.unwrap_or_default(),
            iso_3166_3_codes: iso_3166_3_codes.unwrap_or_default(),
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
