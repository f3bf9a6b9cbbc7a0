// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use uuid::Uuid;

use super::{
    Alias, Area, Genre, LifeSpan, Rating, Recording, Relationship, Release, ReleaseGroup, Tag,
    UserRating, UserTag, Work,
};
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// A person, group, orchestra, choir or fictional character.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    /// MusicBrainz artist ID (MBID).
    pub id: Uuid,
    pub name: String,
    pub sort_name: Option<String>,
    /// Disambiguation comment (e.g., "US hip hop artist").
    pub disambiguation: Option<String>,
    /// Artist type (e.g., "Person", "Group").
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub type_id: Option<Uuid>,
    pub gender: Option<String>,
    pub gender_id: Option<Uuid>,
    /// Country code (ISO 3166-1 alpha-2).
    pub country: Option<String>,
    pub area: Option<Area>,
    pub begin_area: Option<Area>,
    pub end_area: Option<Area>,
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
    pub recordings: Vec<Recording>,
    pub releases: Vec<Release>,
    pub release_groups: Vec<ReleaseGroup>,
    pub works: Vec<Work>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Artist {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut name = None;
        let mut sort_name = None;
        let mut disambiguation = None;
        let mut type_name = None;
        let mut type_id = None;
        let mut gender = None;
        let mut gender_id = None;
        let mut country = None;
        let mut area = None;
        let mut begin_area = None;
        let mut end_area = None;
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
        let mut recordings = None;
        let mut releases = None;
        let mut release_groups = None;
        let mut works = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "id" => id = property.value()?,
                "name" => name = property.value()?,
                "sort-name" => sort_name = property.value()?,
                "disambiguation" => disambiguation = property.value()?,
                "type" => type_name = property.value()?,
                "type-id" => type_id = property.value()?,
                "gender" => gender = property.value()?,
                "gender-id" => gender_id = property.value()?,
                "country" => country = property.value()?,
                "area" => area = property.value()?,
                "begin-area" | "begin_area" => begin_area = property.value()?,
                "end-area" | "end_area" => end_area = property.value()?,
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
                "recordings" => recordings = property.list()?,
                "releases" => releases = property.list()?,
                "release-groups" => release_groups = property.list()?,
                "works" => works = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Artist {
            id: required(id, "id")?,
            name: required(name, "name")?,
            sort_name,
            disambiguation,
            type_name,
            type_id,
            gender,
            gender_id,
            country,
            area,
            begin_area,
            end_area,
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
            recordings: recordings.unwrap_or_default(),
            releases: releases.unwrap_or_default(),
            release_groups: release_groups.unwrap_or_default(),
            works: works.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}
