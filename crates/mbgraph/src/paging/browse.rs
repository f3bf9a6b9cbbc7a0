// SPDX-License-Identifier: GPL-3.0-or-later

use std::marker::PhantomData;

use serde::Serialize;
use url::form_urlencoded;

use super::{Page, PagePolicy};
use crate::entities::Entity;
use crate::entity_type::EntityType;
use crate::error::DecodeError;
use crate::include::Include;
use crate::json::{required, JsonObject, Properties, UnhandledProperties};

/// Parameters of a browse request: entities of one kind linked to an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseQuery {
    pub anchor: EntityType,
    pub anchor_id: String,
    pub includes: Vec<Include>,
    /// Extra filters such as `type=album` or `status=official`.
    pub params: Vec<(String, String)>,
    pub limit: Option<u32>,
    pub offset: usize,
}

impl BrowseQuery {
    pub fn new(anchor: EntityType, anchor_id: impl Into<String>) -> Self {
        Self {
            anchor,
            anchor_id: anchor_id.into(),
            includes: Vec::new(),
            params: Vec::new(),
            limit: None,
            offset: 0,
        }
    }

    pub fn include(mut self, include: Include) -> Self {
        self.includes.push(include);
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// Browse policy for entities of kind `T`.
#[derive(Debug, Clone)]
pub struct Browse<T> {
    query: BrowseQuery,
    marker: PhantomData<fn() -> T>,
}

impl<T> Browse<T> {
    pub fn new(query: BrowseQuery) -> Self {
        Self {
            query,
            marker: PhantomData,
        }
    }

    pub fn query(&self) -> &BrowseQuery {
        &self.query
    }
}

impl<T: Entity> PagePolicy for Browse<T> {
    type Page = BrowsePage<T>;

    fn endpoint(&self) -> &'static str {
        T::ENTITY_TYPE.endpoint()
    }

    fn append_query(&self, query: &mut form_urlencoded::Serializer<'_, String>) {
        query.append_pair(self.query.anchor.endpoint(), &self.query.anchor_id);
        if !self.query.includes.is_empty() {
            query.append_pair("inc", &Include::join(&self.query.includes));
        }
        for (name, value) in &self.query.params {
            query.append_pair(name, value);
        }
    }
}

/// One window of a browse result: `<kind>-count`, `<kind>-offset` and the items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowsePage<T> {
    pub count: usize,
    pub offset: Option<usize>,
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl<T: Entity> JsonObject for BrowsePage<T> {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let kind = T::ENTITY_TYPE;
        let count_name = format!("{}-count", kind.endpoint());
        let offset_name = format!("{}-offset", kind.endpoint());
        let mut count = None;
        let mut offset = None;
        let mut items = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                name if name == count_name => count = property.value()?,
                name if name == offset_name => offset = property.value()?,
                name if name == kind.list_property() => items = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(BrowsePage {
            count: required(count, &count_name)?,
            offset,
            items: items.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}

impl<T: Entity> Page for BrowsePage<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn total(&self) -> usize {
        self.count
    }

    fn reported_offset(&self) -> Option<usize> {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ReleaseGroup;
    use crate::json::decode_value;
    use serde_json::json;

    #[test]
    fn test_query_carries_anchor_and_filters() {
        let policy: Browse<ReleaseGroup> = Browse::new(
            BrowseQuery::new(EntityType::Artist, "a74b1b7f-71a5-4011-9441-d0b5e4122711")
                .include(Include::ArtistCredits)
                .param("type", "album"),
        );
        let mut query = form_urlencoded::Serializer::new(String::new());
        policy.append_query(&mut query);
        assert_eq!(policy.endpoint(), "release-group");
        assert_eq!(
            query.finish(),
            "artist=a74b1b7f-71a5-4011-9441-d0b5e4122711&inc=artist-credits&type=album"
        );
    }

    #[test]
    fn test_reads_kind_specific_window() {
        let page: BrowsePage<ReleaseGroup> = decode_value(json!({
            "release-group-offset": 0,
            "release-group-count": 1,
            "release-groups": [
                {"id": "b1392450-e666-3926-a536-22c65f834433", "title": "OK Computer"}
            ]
        }))
        .unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.offset, Some(0));
        assert_eq!(page.items[0].title, "OK Computer");
    }

    #[test]
    fn test_count_is_required() {
        let error =
            decode_value::<BrowsePage<ReleaseGroup>>(json!({"release-groups": []})).unwrap_err();
        assert!(error.is_missing_property("release-group-count"));
    }
}
