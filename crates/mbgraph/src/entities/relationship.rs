// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use super::{
    Area, Artist, Event, Instrument, Label, Place, Recording, Release, ReleaseGroup, Series, Url,
    Work,
};
use crate::entity_type::EntityType;
use crate::error::DecodeError;
use crate::json::{JsonObject, JsonValue, Properties, Property, UnhandledProperties};
use crate::partial_date::PartialDate;

/// The entity at the far end of a relationship.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipTarget {
    Area(Box<Area>),
    Artist(Box<Artist>),
    Event(Box<Event>),
    Instrument(Box<Instrument>),
    Label(Box<Label>),
    Place(Box<Place>),
    Recording(Box<Recording>),
    Release(Box<Release>),
    ReleaseGroup(Box<ReleaseGroup>),
    Series(Box<Series>),
    Url(Box<Url>),
    Work(Box<Work>),
}

impl RelationshipTarget {
    pub fn entity_type(&self) -> EntityType {
        match self {
            RelationshipTarget::Area(_) => EntityType::Area,
            RelationshipTarget::Artist(_) => EntityType::Artist,
            RelationshipTarget::Event(_) => EntityType::Event,
            RelationshipTarget::Instrument(_) => EntityType::Instrument,
            RelationshipTarget::Label(_) => EntityType::Label,
            RelationshipTarget::Place(_) => EntityType::Place,
            RelationshipTarget::Recording(_) => EntityType::Recording,
            RelationshipTarget::Release(_) => EntityType::Release,
            RelationshipTarget::ReleaseGroup(_) => EntityType::ReleaseGroup,
            RelationshipTarget::Series(_) => EntityType::Series,
            RelationshipTarget::Url(_) => EntityType::Url,
            RelationshipTarget::Work(_) => EntityType::Work,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            RelationshipTarget::Area(area) => area.id,
            RelationshipTarget::Artist(artist) => artist.id,
            RelationshipTarget::Event(event) => event.id,
            RelationshipTarget::Instrument(instrument) => instrument.id,
            RelationshipTarget::Label(label) => label.id,
            RelationshipTarget::Place(place) => place.id,
            RelationshipTarget::Recording(recording) => recording.id,
            RelationshipTarget::Release(release) => release.id,
            RelationshipTarget::ReleaseGroup(release_group) => release_group.id,
            RelationshipTarget::Series(series) => series.id,
            RelationshipTarget::Url(url) => url.id,
            RelationshipTarget::Work(work) => work.id,
        }
    }

    /// Decodes the slot selected by the discriminator.
    fn read(kind: EntityType, property: Property) -> Result<Option<Self>, DecodeError> {
        Ok(match kind {
            EntityType::Area => property.value()?.map(|e| Self::Area(Box::new(e))),
            EntityType::Artist => property.value()?.map(|e| Self::Artist(Box::new(e))),
            EntityType::Event => property.value()?.map(|e| Self::Event(Box::new(e))),
            EntityType::Instrument => property.value()?.map(|e| Self::Instrument(Box::new(e))),
            EntityType::Label => property.value()?.map(|e| Self::Label(Box::new(e))),
            EntityType::Place => property.value()?.map(|e| Self::Place(Box::new(e))),
            EntityType::Recording => property.value()?.map(|e| Self::Recording(Box::new(e))),
            EntityType::Release => property.value()?.map(|e| Self::Release(Box::new(e))),
            EntityType::ReleaseGroup => {
                property.value()?.map(|e| Self::ReleaseGroup(Box::new(e)))
            }
            EntityType::Series => property.value()?.map(|e| Self::Series(Box::new(e))),
            EntityType::Url => property.value()?.map(|e| Self::Url(Box::new(e))),
            EntityType::Work => property.value()?.map(|e| Self::Work(Box::new(e))),
            EntityType::CdStub | EntityType::Collection | EntityType::Genre => None,
        })
    }
}

/// The `target-type` discriminator as sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TargetType {
    Known(EntityType),
    Unrecognized(String),
}

/// A typed link from the entity holding it to exactly one target entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Relationship {
    /// Link type name (e.g., "member of band", "producer").
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub type_id: Option<Uuid>,
    /// `forward` or `backward`, relative to the holding entity.
    pub direction: Option<String>,
    pub target_type: Option<TargetType>,
    pub target: Option<RelationshipTarget>,
    pub target_credit: Option<String>,
    pub source_credit: Option<String>,
    pub ordering_key: Option<u32>,
    pub begin: Option<PartialDate>,
    pub end: Option<PartialDate>,
    pub ended: Option<bool>,
    pub attributes: Vec<String>,
    pub attribute_ids: BTreeMap<String, Uuid>,
    pub attribute_values: BTreeMap<String, String>,
    pub attribute_credits: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl Relationship {
    pub fn target_entity_type(&self) -> Option<EntityType> {
        match &self.target_type {
            Some(TargetType::Known(kind)) => Some(*kind),
            _ => None,
        }
    }
}

impl JsonObject for Relationship {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut type_name = None;
        let mut type_id = None;
        let mut direction = None;
        let mut discriminator: Option<String> = None;
        let mut target_credit = None;
        let mut source_credit = None;
        let mut ordering_key = None;
        let mut begin = None;
        let mut end = None;
        let mut ended = None;
        let mut attributes = None;
        let mut attribute_ids = None;
        let mut attribute_values = None;
        let mut attribute_credits = None;
        // Target-shaped properties wait until the discriminator is known.
        let mut slots: Vec<(EntityType, Property)> = Vec::new();
        while let Some(property) = properties.next_property() {
            match property.name() {
                "type" => type_name = property.value()?,
                "type-id" => type_id = property.value()?,
                "direction" => direction = property.value()?,
                "target-type" => discriminator = property.value()?,
                "target-credit" => target_credit = property.value()?,
                "source-credit" => source_credit = property.value()?,
                "ordering-key" => ordering_key = property.value()?,
                "begin" => begin = property.value()?,
                "end" => end = property.value()?,
                "ended" => ended = property.value()?,
                "attributes" => attributes = property.list()?,
                "attribute-ids" => attribute_ids = property.dictionary()?,
                "attribute-values" => attribute_values = property.dictionary()?,
                "attribute-credits" => attribute_credits = property.dictionary()?,
                other => match EntityType::from_discriminator(other) {
                    Some(kind) if kind.is_relationship_target() => slots.push((kind, property)),
                    _ => properties.unhandled(property),
                },
            }
        }

        let (target_type, target) = resolve_target(discriminator, slots, properties)?;

        Ok(Relationship {
            type_name,
            type_id,
            direction,
            target_type,
            target,
            target_credit,
            source_credit,
            ordering_key,
            begin,
            end,
            ended,
            attributes: attributes.unwrap_or_default(),
            attribute_ids: attribute_ids.unwrap_or_default(),
            attribute_values: attribute_values.unwrap_or_default(),
            attribute_credits: attribute_credits.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}

/// Picks the target slot named by the discriminator.
///
/// The discriminator decides; the mere presence of a slot never does. Slots
/// that were not selected, and discriminators outside the closed set, are
/// kept as unhandled properties.
fn resolve_target(
    discriminator: Option<String>,
    slots: Vec<(EntityType, Property)>,
    properties: &mut Properties,
) -> Result<(Option<TargetType>, Option<RelationshipTarget>), DecodeError> {
    let Some(raw) = discriminator else {
        for (_, slot) in slots {
            properties.unhandled(slot);
        }
        return Ok((None, None));
    };

    let kind = match EntityType::from_discriminator(&raw) {
        Some(kind) if kind.is_relationship_target() => kind,
        _ => {
            properties.unhandled_value("target-type", JsonValue::String(raw.clone()));
            for (_, slot) in slots {
                properties.unhandled(slot);
            }
            return Ok((Some(TargetType::Unrecognized(raw)), None));
        }
    };

    let mut target = None;
    for (slot_kind, slot) in slots {
        if slot_kind == kind && target.is_none() {
            target = RelationshipTarget::read(kind, slot)?;
        } else {
            properties.unhandled(slot);
        }
    }
    Ok((Some(TargetType::Known(kind)), target))
}
