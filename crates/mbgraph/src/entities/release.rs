// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use super::{
    Alias, Area, Collection, Disc, Genre, Label, NameCredit, Recording, Relationship,
    ReleaseGroup, Tag, UserTag,
};
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};
use crate::partial_date::PartialDate;

/// A unique issue of a release group: one pressing, one digital edition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Release {
    pub id: Uuid,
    pub title: String,
    pub disambiguation: Option<String>,
    pub status: Option<String>,
    pub status_id: Option<Uuid>,
    pub packaging: Option<String>,
    pub packaging_id: Option<Uuid>,
    pub quality: Option<String>,
    pub date: Option<PartialDate>,
    pub country: Option<String>,
    pub release_events: Vec<ReleaseEvent>,
    pub barcode: Option<String>,
    pub asin: Option<String>,
    pub text_representation: Option<TextRepresentation>,
    pub artist_credit: Vec<NameCredit>,
    pub label_info: Vec<LabelInfo>,
    pub media: Vec<Medium>,
    /// Total number of tracks over all media, as reported in search results.
    pub track_count: Option<u32>,
    pub release_group: Option<ReleaseGroup>,
    pub cover_art_archive: Option<CoverArtArchive>,
    pub collections: Vec<Collection>,
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

impl JsonObject for Release {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut title = None;
        let mut disambiguation = None;
        let mut status = None;
        let mut status_id = None;
        let mut packaging = None;
        let mut packaging_id = None;
        let mut quality = None;
        let mut date = None;
        let mut country = None;
        let mut release_events = None;
        let mut barcode = None;
        let mut asin = None;
        let mut text_representation = None;
        let mut artist_credit = None;
        let mut label_info = None;
        let mut media = None;
        let mut track_count = None;
        let mut release_group = None;
        let mut cover_art_archive = None;
        let mut collections = None;
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
                "title" => title = property.value()?,
                "disambiguation" => disambiguation = property.value()?,
                "status" => status = property.value()?,
                "status-id" => status_id = property.value()?,
                "packaging" => packaging = property.value()?,
                "packaging-id" => packaging_id = property.value()?,
                "quality" => quality = property.value()?,
                "date" => date = property.value()?,
                "country" => country = property.value()?,
                "release-events" => release_events = property.list()?,
                "barcode" => barcode = property.value()?,
                "asin" => asin = property.value()?,
                "text-representation" => text_representation = property.value()?,
                "artist-credit" => artist_credit = property.list()?,
                "label-info" => label_info = property.list()?,
                "media" => media = property.list()?,
                "track-count" => track_count = property.value()?,
                "release-group" => release_group = property.value()?,
                "cover-art-archive" => cover_art_archive = property.value()?,
                "collections" => collections = property.list()?,
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
        Ok(Release {
            id: required(id, "id")?,
            title: required(title, "title")?,
            disambiguation,
            status,
            status_id,
            packaging,
            packaging_id,
            quality,
            date,
            country,
            release_events: release_events.unwrap_or_default(),
            barcode,
            asin,
            text_representation,
            artist_credit: artist_credit.unwrap_or_default(),
            label_info: label_info.unwrap_or_default(),
            media: media.unwrap_or_default(),
            track_count,
            release_group,
            cover_art_archive,
            collections: collections.unwrap_or_default(),
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

/// A country-specific release date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseEvent {
    pub date: Option<PartialDate>,
    pub area: Option<Area>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for ReleaseEvent {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut date = None;
        let mut area = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "date" => date = property.value()?,
                "area" => area = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(ReleaseEvent {
            date,
            area,
            unhandled: properties.finish(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRepresentation {
    /// ISO 639-3 code.
    pub language: Option<String>,
    /// ISO 15924 code.
    pub script: Option<String>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for TextRepresentation {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut language = None;
        let mut script = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "language" => language = property.value()?,
                "script" => script = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(TextRepresentation {
            language,
            script,
            unhandled: properties.finish(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LabelInfo {
    pub catalog_number: Option<String>,
    pub label: Option<Label>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for LabelInfo {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut catalog_number = None;
        let mut label = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "catalog-number" => catalog_number = property.value()?,
                "label" => label = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(LabelInfo {
            catalog_number,
            label,
            unhandled: properties.finish(),
        })
    }
}

/// Availability of artwork in the Cover Art Archive.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoverArtArchive {
    pub artwork: bool,
    pub count: u32,
    pub front: bool,
    pub back: bool,
    pub darkened: bool,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for CoverArtArchive {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut archive = CoverArtArchive::default();
        while let Some(property) = properties.next_property() {
            match property.name() {
                "artwork" => archive.artwork = property.value()?.unwrap_or_default(),
                "count" => archive.count = property.value()?.unwrap_or_default(),
                "front" => archive.front = property.value()?.unwrap_or_default(),
                "back" => archive.back = property.value()?.unwrap_or_default(),
                "darkened" => archive.darkened = property.value()?.unwrap_or_default(),
                _ => properties.unhandled(property),
            }
        }
        archive.unhandled = properties.finish();
        Ok(archive)
    }
}

/// One disc, side or file set of a release.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Medium {
    pub position: Option<u32>,
    pub title: Option<String>,
    pub format: Option<String>,
    pub format_id: Option<Uuid>,
    pub track_count: Option<u32>,
    /// Index of the first entry of `tracks` within the medium, for partial track lists.
    pub track_offset: Option<u32>,
    pub disc_count: Option<u32>,
    pub pregap: Option<Track>,
    pub tracks: Vec<Track>,
    pub data_tracks: Vec<Track>,
    pub discs: Vec<Disc>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Medium {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut position = None;
        let mut title = None;
        let mut format = None;
        let mut format_id = None;
        let mut track_count = None;
        let mut track_offset = None;
        let mut disc_count = None;
        let mut pregap = None;
        let mut tracks = None;
        let mut data_tracks = None;
        let mut discs = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "position" => position = property.value()?,
                "title" => title = property.value()?,
                "format" => format = property.value()?,
                "format-id" => format_id = property.value()?,
                "track-count" => track_count = property.value()?,
                "track-offset" => track_offset = property.value()?,
                "disc-count" => disc_count = property.value()?,
                "pregap" => pregap = property.value()?,
                "tracks" => tracks = property.list()?,
                "data-tracks" => data_tracks = property.list()?,
                "discs" => discs = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Medium {
            position,
            title,
            format,
            format_id,
            track_count,
            track_offset,
            disc_count,
            pregap,
            tracks: tracks.unwrap_or_default(),
            data_tracks: data_tracks.unwrap_or_default(),
            discs: discs.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Track {
    pub id: Uuid,
    /// Track number as printed (`A1`, `3`, ...).
    pub number: Option<String>,
    pub title: Option<String>,
    pub position: Option<u32>,
    pub length: Option<Duration>,
    pub artist_credit: Vec<NameCredit>,
    pub recording: Option<Recording>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Track {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut number = None;
        let mut title = None;
        let mut position = None;
        let mut length = None;
        let mut artist_credit = None;
        let mut recording = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "id" => id = property.value()?,
                "number" => number = property.value()?,
                "title" => title = property.value()?,
                "position" => position = property.value()?,
                "length" => length = property.value()?,
                "artist-credit" => artist_credit = property.list()?,
                "recording" => recording = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(Track {
            id: required(id, "id")?,
            number,
            title,
            position,
            length,
            artist_credit: artist_credit.unwrap_or_default(),
            recording,
            unhandled: properties.finish(),
        })
    }
}
