// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use uuid::Uuid;

use super::{
    Alias, Genre, NameCredit, Rating, Relationship, Release, Tag, UserRating, UserTag,
};
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};
use crate::partial_date::PartialDate;

/// The "album" grouping of every release of the same work.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    pub id: Uuid,
    pub title: String,
    pub disambiguation: Option<String>,
    /// Primary type (e.g., "Album", "EP", "Single").
    pub primary_type: Option<String>,
    pub primary_type_id: Option<Uuid>,
    /// Secondary types (e.g., ["Compilation", "Live"]).
    pub secondary_types: Vec<String>,
    pub secondary_type_ids: Vec<Uuid>,
    pub first_release_date: Option<PartialDate>,
    pub artist_credit: Vec<NameCredit>,
    pub releases: Vec<Release>,
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

impl JsonObject for ReleaseGroup {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut title = None;
        let mut disambiguation = None;
        let mut primary_type = None;
        let mut primary_type_id = None;
        let mut secondary_types = None;
        let mut secondary_type_ids = None;
        let mut first_release_date = None;
        let mut artist_credit = None;
        let mut releases = None;
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
                "primary-type" => primary_type = property.value()?,
                "primary-type-id" => primary_type_id = property.value()?,
                "secondary-types" => secondary_types = property.list()?,
                "secondary-type-ids" => secondary_type_ids = property.list()?,
                "first-release-date" => first_release_date = property.value()?,
                "artist-credit" => artist_credit = property.list()?,
                "releases" => releases = property.list()?,
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
        Ok(ReleaseGroup {
            id: required(id, "id")?,
            title: required(title, "title")?,
            disambiguation,
            primary_type,
            primary_type_id,
            secondary_types: secondary_types.unwrap_or_default(),
            secondary_type_ids: secondary_type_ids.unwrap_or_default(),
            first_release_date,
            artist_credit: artist_credit.unwrap_or_default(),
            releases: releases.unwrap_or_default(),
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
