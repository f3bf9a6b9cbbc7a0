// SPDX-License-Identifier: GPL-3.0-or-later

use uuid::Uuid;

use super::{
    Alias, Area, Artist, CdStub, Collection, Event, Genre, Instrument, Label, Place, Rating,
    Recording, Relationship, Release, ReleaseGroup, Series, Tag, Url, UserRating, UserTag, Work,
};
use crate::entity_type::EntityType;
use crate::json::ReadValue;

/// A top-level resource served under its own endpoint.
pub trait Entity: ReadValue {
    const ENTITY_TYPE: EntityType;

    fn endpoint() -> &'static str {
        Self::ENTITY_TYPE.endpoint()
    }
}

/// An entity identified by an MBID.
pub trait MbEntity {
    fn mbid(&self) -> Uuid;
    fn disambiguation(&self) -> Option<&str>;
}

/// Entities with a display name (`name` or `title` on the wire).
pub trait Named {
    fn name(&self) -> &str;
}

pub trait Typed {
    fn type_name(&self) -> Option<&str>;
    fn type_id(&self) -> Option<Uuid>;
}

pub trait Aliased {
    fn aliases(&self) -> &[Alias];
}

pub trait Annotated {
    fn annotation(&self) -> Option<&str>;
}

pub trait Tagged {
    fn tags(&self) -> &[Tag];
    fn user_tags(&self) -> &[UserTag];
}

pub trait Genred {
    fn genres(&self) -> &[Genre];
    fn user_genres(&self) -> &[Genre];
}

pub trait Rated {
    fn rating(&self) -> Option<&Rating>;
    fn user_rating(&self) -> Option<&UserRating>;
}

pub trait Related {
    fn relationships(&self) -> &[Relationship];
}

macro_rules! impl_entity {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(impl Entity for $ty {
            const ENTITY_TYPE: EntityType = EntityType::$kind;
        })+
    };
}

impl_entity!(
    Area => Area,
    Artist => Artist,
    CdStub => CdStub,
    Collection => Collection,
    Event => Event,
    Genre => Genre,
    Instrument => Instrument,
    Label => Label,
    Place => Place,
    Recording => Recording,
    Release => Release,
    ReleaseGroup => ReleaseGroup,
    Series => Series,
    Url => Url,
    Work => Work,
);

macro_rules! impl_mb_entity {
    ($($ty:ty),+ $(,)?) => {
        $(impl MbEntity for $ty {
            fn mbid(&self) -> Uuid {
                self.id
            }

            fn disambiguation(&self) -> Option<&str> {
                self.disambiguation.as_deref()
            }
        })+
    };
}

impl_mb_entity!(
    Area,
    Artist,
    Event,
    Genre,
    Instrument,
    Label,
    Place,
    Recording,
    Release,
    ReleaseGroup,
    Series,
    Work,
);

macro_rules! impl_named {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(impl Named for $ty {
            fn name(&self) -> &str {
                &self.$field
            }
        })+
    };
}

impl_named!(
    Area => name,
    Artist => name,
    CdStub => title,
    Collection => name,
    Event => name,
    Genre => name,
    Instrument => name,
    Label => name,
    Place => name,
    Recording => title,
    Release => title,
    ReleaseGroup => title,
    Series => name,
    Work => title,
);

macro_rules! impl_typed {
    ($($ty:ty),+ $(,)?) => {
        $(impl Typed for $ty {
            fn type_name(&self) -> Option<&str> {
                self.type_name.as_deref()
            }

            fn type_id(&self) -> Option<Uuid> {
                self.type_id
            }
        })+
    };
}

impl_typed!(Area, Artist, Collection, Event, Instrument, Label, Place, Series, Work);

// Release groups carry a primary type instead of a plain one.
impl Typed for ReleaseGroup {
    fn type_name(&self) -> Option<&str> {
        self.primary_type.as_deref()
    }

    fn type_id(&self) -> Option<Uuid> {
        self.primary_type_id
    }
}

macro_rules! impl_aliased {
    ($($ty:ty),+ $(,)?) => {
        $(impl Aliased for $ty {
            fn aliases(&self) -> &[Alias] {
                &self.aliases
            }
        })+
    };
}

impl_aliased!(
    Area,
    Artist,
    Event,
    Genre,
    Instrument,
    Label,
    Place,
    Recording,
    Release,
    ReleaseGroup,
    Series,
    Work,
);

macro_rules! impl_annotated {
    ($($ty:ty),+ $(,)?) => {
        $(impl Annotated for $ty {
            fn annotation(&self) -> Option<&str> {
                self.annotation.as_deref()
            }
        })+
    };
}

impl_annotated!(
    Area,
    Artist,
    Event,
    Instrument,
    Label,
    Place,
    Recording,
    Release,
    ReleaseGroup,
    Series,
    Work,
);

macro_rules! impl_tagged_genred {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Tagged for $ty {
                fn tags(&self) -> &[Tag] {
                    &self.tags
                }

                fn user_tags(&self) -> &[UserTag] {
                    &self.user_tags
                }
            }

            impl Genred for $ty {
                fn genres(&self) -> &[Genre] {
                    &self.genres
                }

                fn user_genres(&self) -> &[Genre] {
                    &self.user_genres
                }
            }
        )+
    };
}

impl_tagged_genred!(
    Area,
    Artist,
    Event,
    Instrument,
    Label,
    Place,
    Recording,
    Release,
    ReleaseGroup,
    Series,
    Work,
);

macro_rules! impl_rated {
    ($($ty:ty),+ $(,)?) => {
        $(impl Rated for $ty {
            fn rating(&self) -> Option<&Rating> {
                self.rating.as_ref()
            }

            fn user_rating(&self) -> Option<&UserRating> {
                self.user_rating.as_ref()
            }
        })+
    };
}

impl_rated!(Artist, Event, Label, Recording, ReleaseGroup, Work);

macro_rules! impl_related {
    ($($ty:ty),+ $(,)?) => {
        $(impl Related for $ty {
            fn relationships(&self) -> &[Relationship] {
                &self.relationships
            }
        })+
    };
}

impl_related!(
    Area,
    Artist,
    Event,
    Instrument,
    Label,
    Place,
    Recording,
    Release,
    ReleaseGroup,
    Series,
    Url,
    Work,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::decode_value;
    use serde_json::json;

    fn describe<T: MbEntity + Named + Tagged>(entity: &T) -> String {
        format!("{} ({} tags)", entity.name(), entity.tags().len())
    }

    #[test]
    fn test_capabilities_are_generic() {
        let work: Work = decode_value(json!({
            "id": "e7c3d1a2-6a3b-4f93-8a33-8f0c0a2c3c01",
            "title": "Clair de lune",
            "tags": [{"name": "classical", "count": 3}]
        }))
        .unwrap();
        assert_eq!(describe(&work), "Clair de lune (1 tags)");
        assert_eq!(Work::endpoint(), "work");
        assert_eq!(ReleaseGroup::ENTITY_TYPE, EntityType::ReleaseGroup);
    }

    #[test]
    fn test_release_group_type_is_primary_type() {
        let release_group: ReleaseGroup = decode_value(json!({
            "id": "b1392450-e666-3926-a536-22c65f834433",
            "title": "OK Computer",
            "primary-type": "Album"
        }))
        .unwrap();
        assert_eq!(Typed::type_name(&release_group), Some("Album"));
    }
}
