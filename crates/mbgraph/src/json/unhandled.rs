// SPDX-License-Identifier: GPL-3.0-or-later

use serde::ser::{Serialize, Serializer};
use serde_json::Map;

/// Generic JSON value used for properties no reader models explicitly.
pub type JsonValue = serde_json::Value;

/// Properties of an object that its reader did not recognise, in encounter order.
///
/// Storage is only allocated once the first property arrives, so the common
/// case of a fully understood object costs a single null pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnhandledProperties {
    map: Option<Box<Map<String, JsonValue>>>,
}

impl UnhandledProperties {
    pub fn is_empty(&self) -> bool {
        self.map.as_ref().map_or(true, |map| map.is_empty())
    }

    pub fn len(&self) -> usize {
        self.map.as_ref().map_or(0, |map| map.len())
    }

    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.map.as_ref().and_then(|map| map.get(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JsonValue)> + '_ {
        self.map
            .iter()
            .flat_map(|map| map.iter())
            .map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn insert(&mut self, name: String, value: JsonValue) {
        self.map
            .get_or_insert_with(Default::default)
            .insert(name, value);
    }
}

impl Serialize for UnhandledProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
