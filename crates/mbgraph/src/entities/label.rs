// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use uuid::Uuid;

use super::{
    Alias, Area, Genre, LifeSpan, Rating, Relationship, Release, Tag, UserRating, UserTag,
};
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// A record label, imprint or distributor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Label {
    pub id: Uuid,
    pub name: String,
    pub sort_name: Option<String>,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub type_id: Option<Uuid>,
    pub country: Option<String>,
    pub area: Option<Area>,
    /// The `LC` number, without the prefix.
    pub label_code: Option<u32>,
    pub life_span: Option<LifeSpan>,
    pub ipis: Vec<String>,
    pub isnis: Vec<String>,
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
    pub releases: Vec<Release>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Label {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut name = None;
        let mut sort_name = None;
        let mut disambiguation = None;
        let mut type_name = None;
        let mut type_id = None;
        let mut country = None;
        let mut area = None;
        let mut label_code = None;
        let mut life_span = None;
        let mut ipis = None;
        let mut isnis = None;
        let mut aliases = None;
        let mut annotation = None;
        let mut tags = None;
        let mut user_tags = None;
        let mut genres = None;
        let mut user_genres = None;
        let mut rating = None;
        let mut user_rating = None;
        let mut relationships = None;
        let mut releases = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "id" => id = property.value()?,
                "name" => name = property.value()?,
                "sort-name" => sort_name = property.value()?,
                "disambiguation" => disambiguation = property.value()?,
                "type" => type_name = property.value()?,
                "type-id" => type_id = property.value()?,
                "country" => country = property.value()?,
                "area" => area = property.value()?,
                "label-code" => label_code = property.value()?,
                "life-span" => life_span = property.value()?,
                "ipis" => ipis = property.list()?,
                "isnis" => isnis = property.list()?,
                "aliases" => aliases = property.list()?,
                "annotation" => annotation = property.value()?,
                "tags" => tags = property.list()?,
                "user-tags" => user_tags = property.list()?,
                "genres" => genres = property.list()?,
                "user-genres" => user_genres = property.list()?,
                "rating" => rating = property.value()?,
                "user-rating" => user_rating = property.value()?,
                "relations" => relationships = property.list()?,
                "releases" => releases = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Label {
            id: required(id, "id")?,
            name: required(name, "name")?,
            sort_name,
            disambiguation,
            type_name,
            type_id,
            country,
            area,
            label_code,
            life_span,
            ipis: ipis.unwrap_or_default(),
            isnis: isnis.unwrap_or_default(),
            aliases: aliases.unwrap_or_default(),
            annotation,
            tags: tags.unwrap_or_default(),
            user_tags: user_tags.unwrap_or_default(),
            genres: genres.unwrap_or_default(),
            user_genres: user_genres.unwrap_or_default(),
            rating,
            user_rating,
            relationships: relationships.unwrap_or_default(),
            releases: releases.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}
