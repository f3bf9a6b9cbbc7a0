// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous client for callers without an async runtime.

use reqwest::blocking::Client;
use tracing::{debug, trace};

use crate::client::{include_query, request_url, status_error, MusicBrainzClientBuilder};
use crate::entities::Entity;
use crate::error::Result;
use crate::include::Include;
use crate::json::decode;
use crate::paging::{Browse, BrowseQuery, Cursor, Search, SearchQuery};
use crate::rate_limiter::RateLimiter;
use crate::transport::Transport;

/// Blocking MusicBrainz client sharing the async client's URL scheme and rate limit.
#[derive(Debug, Clone)]
pub struct BlockingMusicBrainzClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl BlockingMusicBrainzClient {
    pub(crate) fn new(client: Client, base_url: String, rate_limiter: RateLimiter) -> Self {
        Self {
            client,
            base_url,
            rate_limiter,
        }
    }

    pub fn builder() -> MusicBrainzClientBuilder {
        MusicBrainzClientBuilder::default()
    }

    pub fn lookup<T: Entity>(&self, id: &str, includes: &[Include]) -> Result<T> {
        let query = include_query(includes);
        let body = self.perform_request(T::ENTITY_TYPE.endpoint(), Some(id), &query)?;
        Ok(decode(&body)?)
    }

    pub fn browse<T: Entity>(&self, query: BrowseQuery) -> Result<Cursor<Browse<T>, &Self>> {
        let (limit, offset) = (query.limit, query.offset);
        Cursor::fetch(self, Browse::new(query), limit, offset)
    }

    pub fn search<T: Entity>(&self, query: SearchQuery) -> Result<Cursor<Search<T>, &Self>> {
        let (limit, offset) = (query.limit, query.offset);
        Cursor::fetch(self, Search::new(query), limit, offset)
    }
}

impl Transport for BlockingMusicBrainzClient {
    fn perform_request(&self, endpoint: &str, id: Option<&str>, query: &str) -> Result<Vec<u8>> {
        let url = request_url(&self.base_url, endpoint, id, query)?;

        self.rate_limiter.acquire_blocking();

        trace!(target: "musicbrainz", "GET {}", url);

        let response = self.client.get(url.as_str()).send()?;

        let status = response.status();
        debug!(target: "musicbrainz", "response status: {}", status);

        if !status.is_success() {
            let body = response.bytes().unwrap_or_default();
            return Err(status_error(status, &url, &body));
        }

        Ok(response.bytes()?.to_vec())
    }
}
