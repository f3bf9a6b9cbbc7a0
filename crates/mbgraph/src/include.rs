// SPDX-License-Identifier: GPL-3.0-or-later

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::entity_type::EntityType;

/// A value of the `inc=` request parameter, selecting sub-queries to embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Include {
    Aliases,
    Annotation,
    Tags,
    UserTags,
    Genres,
    UserGenres,
    Ratings,
    UserRatings,
    ArtistCredits,
    Artists,
    Labels,
    Recordings,
    Releases,
    ReleaseGroups,
    Works,
    Media,
    DiscIds,
    Isrcs,
    Collections,
    UserCollections,
    VariousArtists,
    /// `<kind>-rels`: relationships pointing at entities of one kind.
    Relations(EntityType),
    RecordingLevelRelations,
    ReleaseGroupLevelRelations,
    WorkLevelRelations,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown include `{0}`")]
pub struct UnknownInclude(pub String);

impl Include {
    pub fn as_str(&self) -> Cow<'static, str> {
        let name = match self {
            Include::Aliases => "aliases",
            Include::Annotation => "annotation",
            Include::Tags => "tags",
            Include::UserTags => "user-tags",
            Include::Genres => "genres",
            Include::UserGenres => "user-genres",
            Include::Ratings => "ratings",
            Include::UserRatings => "user-ratings",
            Include::ArtistCredits => "artist-credits",
            Include::Artists => "artists",
            Include::Labels => "labels",
            Include::Recordings => "recordings",
            Include::Releases => "releases",
            Include::ReleaseGroups => "release-groups",
            Include::Works => "works",
            Include::Media => "media",
            Include::DiscIds => "discids",
            Include::Isrcs => "isrcs",
            Include::Collections => "collections",
            Include::UserCollections => "user-collections",
            Include::VariousArtists => "various-artists",
            Include::Relations(kind) => return Cow::Owned(format!("{}-rels", kind.endpoint())),
            Include::RecordingLevelRelations => "recording-level-rels",
            Include::ReleaseGroupLevelRelations => "release-group-level-rels",
            Include::WorkLevelRelations => "work-level-rels",
        };
        Cow::Borrowed(name)
    }

    /// Joins includes into one `inc` value. The separator is a space, which the
    /// query encoder writes as `+`.
    pub fn join(includes: &[Include]) -> String {
        includes
            .iter()
            .map(Include::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl FromStr for Include {
    type Err = UnknownInclude;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(match text {
            "aliases" => Include::Aliases,
            "annotation" => Include::Annotation,
            "tags" => Include::Tags,
            "user-tags" => Include::UserTags,
            "genres" => Include::Genres,
            "user-genres" => Include::UserGenres,
            "ratings" => Include::Ratings,
            "user-ratings" => Include::UserRatings,
            "artist-credits" => Include::ArtistCredits,
            "artists" => Include::Artists,
            "labels" => Include::Labels,
            "recordings" => Include::Recordings,
            "releases" => Include::Releases,
            "release-groups" => Include::ReleaseGroups,
            "works" => Include::Works,
            "media" => Include::Media,
            "discids" => Include::DiscIds,
            "isrcs" => Include::Isrcs,
            "collections" => Include::Collections,
            "user-collections" => Include::UserCollections,
            "various-artists" => Include::VariousArtists,
            "recording-level-rels" => Include::RecordingLevelRelations,
            "release-group-level-rels" => Include::ReleaseGroupLevelRelations,
            "work-level-rels" => Include::WorkLevelRelations,
            other => {
                return other
                    .strip_suffix("-rels")
                    .and_then(EntityType::from_discriminator)
                    .filter(|kind| kind.is_relationship_target())
                    .map(Include::Relations)
                    .ok_or_else(|| UnknownInclude(other.to_string()));
            }
        })
    }
}
