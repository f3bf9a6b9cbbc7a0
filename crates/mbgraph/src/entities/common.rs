// SPDX-License-Identifier: GPL-3.0-or-later

//! Value types shared by several entities.

use serde::Serialize;
use uuid::Uuid;

use super::Artist;
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};
use crate::partial_date::PartialDate;

/// Alternative name of an entity (a translation, a misspelling, a legal name).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Alias {
    pub name: String,
    pub sort_name: Option<String>,
    pub locale: Option<String>,
    pub primary: Option<bool>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub type_id: Option<Uuid>,
    pub begin: Option<PartialDate>,
    pub end: Option<PartialDate>,
    pub ended: Option<bool>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Alias {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut name = None;
        let mut sort_name = None;
        let mut locale = None;
        let mut primary = None;
        let mut type_name = None;
        let mut type_id = None;
        let mut begin = None;
        let mut end = None;
        let mut ended = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "name" => name = property.value()?,
                "sort-name" => sort_name = property.value()?,
                "locale" => locale = property.value()?,
                "primary" => primary = property.value()?,
                "type" => type_name = property.value()?,
                "type-id" => type_id = property.value()?,
                "begin" | "begin-date" => begin = property.value()?,
                "end" | "end-date" => end = property.value()?,
                "ended" => ended = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Alias {
            name: required(name, "name")?,
            sort_name,
            locale,
            primary,
            type_name,
            type_id,
            begin,
            end,
            ended,
            unhandled: properties.finish(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LifeSpan {
    pub begin: Option<PartialDate>,
    pub end: Option<PartialDate>,
    pub ended: Option<bool>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for LifeSpan {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut life_span = LifeSpan::default();
        while let Some(property) = properties.next_property() {
            match property.name() {
                "begin" | "begin-date" => life_span.begin = property.value()?,
                "end" | "end-date" => life_span.end = property.value()?,
                "ended" => life_span.ended = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        life_span.unhandled = properties.finish();
        Ok(life_span)
    }
}

/// A folksonomy tag with its vote count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub name: String,
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Tag {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut name = None;
        let mut count = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "name" => name = property.value()?,
                "count" => count = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Tag {
            name: required(name, "name")?,
            count,
            unhandled: properties.finish(),
        })
    }
}

/// A tag applied by the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserTag {
    pub name: String,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for UserTag {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut name = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "name" => name = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(UserTag {
            name: required(name, "name")?,
            unhandled: properties.finish(),
        })
    }
}

/// Aggregate community rating (0-5, fractional).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Rating {
    pub value: Option<f64>,
    pub votes_count: u32,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Rating {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut rating = Rating::default();
        while let Some(property) = properties.next_property() {
            match property.name() {
                "value" => rating.value = property.value()?,
                "votes-count" => rating.votes_count = property.value()?.unwrap_or_default(),
                _ => properties.unhandled(property),
            }
        }
        rating.unhandled = properties.finish();
        Ok(rating)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserRating {
    pub value: Option<u8>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for UserRating {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut rating = UserRating::default();
        while let Some(property) = properties.next_property() {
            match property.name() {
                "value" => rating.value = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        rating.unhandled = properties.finish();
        Ok(rating)
    }
}

/// One artist's entry in an artist credit, e.g. `Queen` + ` & ` + `David Bowie`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameCredit {
    pub name: Option<String>,
    pub joinphrase: Option<String>,
    pub artist: Artist,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for NameCredit {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut name = None;
        let mut joinphrase = None;
        let mut artist = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "name" => name = property.value()?,
                "joinphrase" => joinphrase = property.value()?,
                "artist" => artist = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(NameCredit {
            name,
            joinphrase,
            artist: required(artist, "artist")?,
            unhandled: properties.finish(),
        })
    }
}

impl NameCredit {
    /// The name printed on the release, falling back to the artist's own name.
    pub fn credited_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.artist.name)
    }
}

/// Renders a full artist credit the way it is printed on a cover.
pub fn credit_text(credits: &[NameCredit]) -> String {
    credits
        .iter()
        .map(|credit| {
            format!(
                "{}{}",
                credit.credited_name(),
                credit.joinphrase.as_deref().unwrap_or_default()
            )
        })
        .collect()
}
