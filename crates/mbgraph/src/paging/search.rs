// SPDX-License-Identifier: GPL-3.0-or-later

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Map;
use url::form_urlencoded;

use super::{Cursor, Page, PagePolicy};
use crate::entities::Entity;
use crate::error::DecodeError;
use crate::json::{required, JsonObject, JsonValue, Properties, ReadValue, UnhandledProperties};

/// Search query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Lucene query string.
    pub query: String,
    /// Maximum number of results (1-100).
    pub limit: Option<u32>,
    /// Offset for pagination.
    pub offset: usize,
    /// Use the simplified DisMax parser instead of full Lucene syntax.
    pub dismax: bool,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
            offset: 0,
            dismax: false,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn dismax(mut self, dismax: bool) -> Self {
        self.dismax = dismax;
        self
    }
}

/// Search policy for entities of kind `T`.
#[derive(Debug, Clone)]
pub struct Search<T> {
    query: SearchQuery,
    marker: PhantomData<fn() -> T>,
}

impl<T> Search<T> {
    pub fn new(query: SearchQuery) -> Self {
        Self {
            query,
            marker: PhantomData,
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

impl<T: Entity> PagePolicy for Search<T> {
    type Page = SearchPage<T>;

    fn endpoint(&self) -> &'static str {
        T::ENTITY_TYPE.endpoint()
    }

    fn append_query(&self, query: &mut form_urlencoded::Serializer<'_, String>) {
        query.append_pair("query", &self.query.query);
        if self.query.dismax {
            query.append_pair("dismax", "true");
        }
    }
}

/// A search hit: the entity plus its relevance score (0-100).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<T> {
    pub score: u8,
    #[serde(flatten)]
    pub item: T,
}

impl<T: ReadValue> JsonObject for SearchResult<T> {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let mut score: Option<u8> = None;
        let mut rest = Map::new();
        while let Some(property) = properties.next_property() {
            match property.name() {
                "score" => score = property.value()?,
                _ => {
                    let (name, value) = property.into_parts();
                    rest.insert(name, value);
                }
            }
        }
        let score = required(score, "score")?;
        if score > 100 {
            return Err(
                DecodeError::invalid(format!("score {score} is above 100")).within_property("score")
            );
        }
        Ok(SearchResult {
            score,
            item: T::read_value(JsonValue::Object(rest))?,
        })
    }
}

/// One window of a search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage<T> {
    /// When the server built the result set.
    pub created: Option<DateTime<Utc>>,
    pub count: usize,
    pub offset: Option<usize>,
    pub items: Vec<SearchResult<T>>,
    #[serde(skip_serializing_if = "UnhandledProperties::is_empty")]
    pub unhandled: UnhandledProperties,
}

impl<T: Entity> JsonObject for SearchPage<T> {
    fn read_object(properties: &mut Properties) -> Result<Self, DecodeError> {
        let list_property = T::ENTITY_TYPE.list_property();
        let mut created = None;
        let mut count = None;
        let mut offset = None;
        let mut items = None;
        while let Some(property) = properties.next_property() {
            match property.name() {
                "created" => created = property.value()?,
                "count" => count = property.value()?,
                "offset" => offset = property.value()?,
                name if name == list_property => items = property.list()?,
                _ => properties.unhandled(property),
            }
        }
        Ok(SearchPage {
            created,
            count: required(count, "count")?,
            offset,
            items: items.unwrap_or_default(),
            unhandled: properties.finish(),
        })
    }
}

impl<T: Entity> Page for SearchPage<T> {
    type Item = SearchResult<T>;

    fn items(&self) -> &[SearchResult<T>] {
        &self.items
    }

    fn total(&self) -> usize {
        self.count
    }

    fn reported_offset(&self) -> Option<usize> {
        self.offset
    }
}

impl<T: Entity, C> Cursor<Search<T>, C> {
    pub fn query(&self) -> &str {
        &self.policy().query().query
    }

    /// Creation time of the result set the current page belongs to.
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.page().created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Artist;
    use crate::json::decode_value;
    use serde_json::json;

    #[test]
    fn test_score_is_split_from_item() {
        let page: SearchPage<Artist> = decode_value(json!({
            "created": "2026-01-08T12:00:00.000Z",
            "count": 1,
            "offset": 0,
            "artists": [{
                "id": "a74b1b7f-71a5-4011-9441-d0b5e4122711",
                "type": "Group",
                "score": 100,
                "name": "Radiohead"
            }]
        }))
        .unwrap();
        assert!(page.created.is_some());
        let hit = &page.items[0];
        assert_eq!(hit.score, 100);
        assert_eq!(hit.item.name, "Radiohead");
        assert!(!hit.item.unhandled.contains("score"));
    }

    #[test]
    fn test_score_above_range_is_invalid() {
        let error = decode_value::<SearchResult<Artist>>(json!({
            "id": "a74b1b7f-71a5-4011-9441-d0b5e4122711",
            "name": "Radiohead",
            "score": 101
        }))
        .unwrap_err();
        assert_eq!(error.path(), "score");
    }

    #[test]
    fn test_dismax_flag() {
        let policy: Search<Artist> = Search::new(SearchQuery::new("Radiohead").dismax(true));
        let mut query = form_urlencoded::Serializer::new(String::new());
        policy.append_query(&mut query);
        assert_eq!(query.finish(), "query=Radiohead&dismax=true");
    }

    #[test]
    fn test_query_starts_at_first_result() {
        assert_eq!(SearchQuery::new("Radiohead").offset, 0);
        assert_eq!(SearchQuery::new("Radiohead").offset(50).offset, 50);
    }
}
