// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The closed set of MusicBrainz entity kinds this crate decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Area,
    Artist,
    #[serde(rename = "cdstub")]
    CdStub,
    Collection,
    Event,
    Genre,
    Instrument,
    Label,
    Place,
    Recording,
    Release,
    ReleaseGroup,
    Series,
    Url,
    Work,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entity type `{0}`")]
pub struct UnknownEntityType(pub String);

impl EntityType {
    pub const ALL: [EntityType; 15] = [
        EntityType::Area,
        EntityType::Artist,
        EntityType::CdStub,
        EntityType::Collection,
        EntityType::Event,
        EntityType::Genre,
        EntityType::Instrument,
        EntityType::Label,
        EntityType::Place,
        EntityType::Recording,
        EntityType::Release,
        EntityType::ReleaseGroup,
        EntityType::Series,
        EntityType::Url,
        EntityType::Work,
    ];

    /// Maps a `target-type` / `entity-type` discriminator onto a kind.
    ///
    /// The server writes `release_group`; the hyphenated spelling used by the
    /// endpoints is accepted as well.
    pub fn from_discriminator(text: &str) -> Option<Self> {
        Some(match text {
            "area" => EntityType::Area,
            "artist" => EntityType::Artist,
            "cdstub" => EntityType::CdStub,
            "collection" => EntityType::Collection,
            "event" => EntityType::Event,
            "genre" => EntityType::Genre,
            "instrument" => EntityType::Instrument,
            "label" => EntityType::Label,
            "place" => EntityType::Place,
            "recording" => EntityType::Recording,
            "release" => EntityType::Release,
            "release_group" | "release-group" => EntityType::ReleaseGroup,
            "series" => EntityType::Series,
            "url" => EntityType::Url,
            "work" => EntityType::Work,
            _ => return None,
        })
    }

    pub fn discriminator(self) -> &'static str {
        match self {
            EntityType::ReleaseGroup => "release_group",
            other => other.endpoint(),
        }
    }

    /// Path segment of the web service resource, also the browse parameter name.
    pub fn endpoint(self) -> &'static str {
        match self {
            EntityType::Area => "area",
            EntityType::Artist => "artist",
            EntityType::CdStub => "cdstub",
            EntityType::Collection => "collection",
            EntityType::Event => "event",
            EntityType::Genre => "genre",
            EntityType::Instrument => "instrument",
            EntityType::Label => "label",
            EntityType::Place => "place",
            EntityType::Recording => "recording",
            EntityType::Release => "release",
            EntityType::ReleaseGroup => "release-group",
            EntityType::Series => "series",
            EntityType::Url => "url",
            EntityType::Work => "work",
        }
    }

    /// Name of the array holding entities of this kind in browse and search pages.
    pub fn list_property(self) -> &'static str {
        match self {
            EntityType::Area => "areas",
            EntityType::Artist => "artists",
            EntityType::CdStub => "cdstubs",
            EntityType::Collection => "collections",
            EntityType::Event => "events",
            EntityType::Genre => "genres",
            EntityType::Instrument => "instruments",
            EntityType::Label => "labels",
            EntityType::Place => "places",
            EntityType::Recording => "recordings",
            EntityType::Release => "releases",
            EntityType::ReleaseGroup => "release-groups",
            EntityType::Series => "series",
            EntityType::Url => "urls",
            EntityType::Work => "works",
        }
    }

    /// Whether a relationship can point at this kind.
    pub fn is_relationship_target(self) -> bool {
        !matches!(
            self,
            EntityType::CdStub | EntityType::Collection | EntityType::Genre
        )
    }
}

impl FromStr for EntityType {
    type Err = UnknownEntityType;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_discriminator(text).ok_or_else(|| UnknownEntityType(text.to_string()))
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.discriminator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminators_round_trip() {
        for kind in EntityType::ALL {
            assert_eq!(EntityType::from_discriminator(kind.discriminator()), Some(kind));
        }
    }

    #[test]
    fn test_release_group_spellings() {
        assert_eq!(
            EntityType::from_discriminator("release-group"),
            Some(EntityType::ReleaseGroup)
        );
        assert_eq!(EntityType::ReleaseGroup.endpoint(), "release-group");
        assert_eq!(EntityType::ReleaseGroup.discriminator(), "release_group");
    }

    #[test]
    fn test_unknown_discriminator() {
        assert_eq!(EntityType::from_discriminator("bogus"), None);
        assert!("bogus".parse::<EntityType>().is_err());
    }
}
