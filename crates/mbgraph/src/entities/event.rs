// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use uuid::Uuid;

use super::{Alias, Genre, LifeSpan, Rating, Relationship, Tag, UserRating, UserTag};
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// An organised event people can attend: a concert, festival or launch party.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub type_id: Option<Uuid>,
    pub cancelled: Option<bool>,
    pub life_span: Option<LifeSpan>,
    /// Start time, as written by the editor (`20:00`).
    pub time: Option<String>,
    pub setlist: Option<String>,
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

impl JsonObject for Event {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut name = None;
        let mut disambiguation = None;
        let mut type_name = None;
        let mut type_id = None;
        let mut cancelled = None;
        let mut life_span = None;
        let mut time = None;
        let mut setlist = None;
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
                "name" => name = property.value()?,
                "disambiguation" => disambiguation = property.value()?,
                "type" => type_name = property.value()?,
                "type-id" => type_id = property.value()?,
                "cancelled" => cancelled = property.value()?,
                "life-span" => life_span = property.value()?,
                "time" => time = property.value()?,
                "setlist" => setlist = property.value()?,
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
        Ok(Event {
            id: required(id, "id")?,
            name: required(name, "name")?,
            disambiguation,
            type_name,
            type_id,
            cancelled,
            life_span,
            time,
            setlist,
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
