// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use serde::Serialize;

use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// An anonymously submitted CD table of contents with free-text track data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CdStub {
    /// The disc ID the stub was submitted for.
    pub id: String,
    pub title: String,
    pub artist: Option<String>,
    pub barcode: Option<String>,
    pub comment: Option<String>,
    pub track_count: Option<u32>,
    pub tracks: Vec<SimpleTrack>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for CdStub {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut title = None;
        let mut artist = None;
        let mut barcode = None;
        let mut comment = None;
        let mut track_count: Option<u32> = None;
        let mut tracks: Option<Vec<SimpleTrack>> = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "id" => id = property.value()?,
                "title" => title = property.value()?,
                "artist" => artist = property.value()?,
                "barcode" => barcode = property.value()?,
                "comment" | "disambiguation" => comment = property.value()?,
                // Search results call it `count`.
                "track-count" | "count" => track_count = property.value()?,
                "tracks" => tracks = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        if let (Some(reported), Some(tracks)) = (track_count, tracks.as_ref()) {
            if reported as usize != tracks.len() {
                return Err(DecodeError::count_mismatch(
                    "track-count",
                    u64::from(reported),
                    tracks.len(),
                ));
            }
        }
        Ok(CdStub {
            id: required(id, "id")?,
            title: required(title, "title")?,
            artist,
            barcode,
            comment,
            track_count,
            tracks: tracks.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleTrack {
    pub title: String,
    pub artist: Option<String>,
    pub length: Option<Duration>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for SimpleTrack {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut title = None;
        let mut artist = None;
        let mut length = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "title" => title = property.value()?,
                "artist" => artist = property.value()?,
                "length" => length = property.value()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(SimpleTrack {
            title: required(title, "title")?,
            artist,
            length,
            unhandled: properties.finish(),
        })
    }
}
