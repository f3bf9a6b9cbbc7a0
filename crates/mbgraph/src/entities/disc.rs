// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use super::Release;
use crate::error::DecodeError;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// A CD table of contents identified by its MusicBrainz disc ID.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Disc {
    pub id: String,
    /// Sector offsets of each track, in track order.
    pub offsets: Vec<u32>,
    /// Total length in sectors.
    pub sectors: Option<u32>,
    pub releases: Vec<Release>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl JsonObject for Disc {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut id = None;
        let mut offset_count: Option<u32> = None;
        let mut offsets: Option<Vec<u32>> = None;
        let mut sectors = None;
        let mut releases = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "id" => id = property.value()?,
                "offset-count" => offset_count = property.value()?,
                "offsets" => offsets = property.list()?,
                "sectors" => sectors = property.value()?,
                "releases" => releases = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        if let (Some(reported), Some(offsets)) = (offset_count, offsets.as_ref()) {
            if reported as usize != offsets.len() {
                return Err(DecodeError::count_mismatch(
                    "offset-count",
                    u64::from(reported),
                    offsets.len(),
                ));
            }
        }
        Ok(Disc {
            id: required(id, "id")?,
            offsets: offsets.unwrap_or_default(),
            sectors,
            releases: releases.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}

impl Disc {
    pub fn track_count(&self) -> usize {
        self.offsets.len()
    }
}
