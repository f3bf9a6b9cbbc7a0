// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed MusicBrainz web service client.
//!
//! This crate decodes MusicBrainz JSON responses into a cross-referenced
//! entity graph and walks browse and search results through resumable
//! cursors. Requests go through a [`Transport`] or [`AsyncTransport`];
//! [`MusicBrainzClient`] and [`BlockingMusicBrainzClient`] implement them over
//! HTTP with built-in rate limiting to comply with MusicBrainz API guidelines.

pub mod blocking;
pub mod client;
#[cfg(test)]
mod client_tests;
pub mod entities;
pub mod entity_type;
pub mod error;
pub mod include;
pub mod json;
pub mod paging;
pub mod partial_date;
pub mod rate_limiter;
pub mod responses;
pub mod transport;

pub use blocking::BlockingMusicBrainzClient;
pub use client::{MusicBrainzClient, MusicBrainzClientBuilder};
pub use entities::*;
pub use entity_type::EntityType;
pub use error::{DecodeError, DecodeErrorKind, MusicBrainzError, Result};
pub use include::Include;
pub use json::{decode, decode_str, decode_value, JsonValue, UnhandledProperties};
pub use paging::{
    Browse, BrowsePage, BrowseQuery, Cursor, Page, PagePolicy, Search, SearchPage, SearchQuery,
    SearchResult, WindowViolation,
};
pub use partial_date::PartialDate;
pub use responses::{DiscIdLookup, ErrorBody, IsrcLookup};
pub use transport::{AsyncTransport, Transport};
