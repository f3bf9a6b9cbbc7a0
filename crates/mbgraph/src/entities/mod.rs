// SPDX-License-Identifier: GPL-3.0-or-later

//! The MusicBrainz entity model.
//!
//! Every type here is built by a [`JsonObject`](crate::json::JsonObject)
//! reader; collection fields are never absent (a missing array decodes as an
//! empty `Vec`), and each object keeps the properties it does not model.

mod area;
mod artist;
mod cdstub;
mod collection;
mod common;
mod disc;
mod event;
mod genre;
mod instrument;
mod label;
mod place;
mod recording;
mod relationship;
mod release;
mod release_group;
mod series;
mod traits;
mod url;
mod work;

pub use area::Area;
pub use artist::Artist;
pub use cdstub::{CdStub, SimpleTrack};
pub use collection::Collection;
pub use common::{credit_text, Alias, LifeSpan, NameCredit, Rating, Tag, UserRating, UserTag};
pub use disc::Disc;
pub use event::Event;
pub use genre::Genre;
pub use instrument::Instrument;
pub use label::Label;
pub use place::{Coordinates, Place};
pub use recording::Recording;
pub use relationship::{Relationship, RelationshipTarget, TargetType};
pub use release::{
    CoverArtArchive, LabelInfo, Medium, Release, ReleaseEvent, TextRepresentation, Track,
};
pub use release_group::ReleaseGroup;
pub use series::Series;
pub use traits::{
    Aliased, Annotated, Entity, Genred, MbEntity, Named, Rated, Related, Tagged, Typed,
};
pub use url::Url;
pub use work::{Work, WorkAttribute};
