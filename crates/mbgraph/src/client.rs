// SPDX-License-Identifier: GPL-3.0-or-later

use crate::blocking::BlockingMusicBrainzClient;
use crate::entities::{Artist, Entity, Recording, ReleaseGroup};
use crate::error::{MusicBrainzError, Result};
use crate::include::Include;
use crate::json::{decode, ReadValue};
use crate::paging::{Browse, BrowseQuery, Cursor, Search, SearchQuery};
use crate::rate_limiter::RateLimiter;
use crate::responses::{DiscIdLookup, ErrorBody, IsrcLookup};
use crate::transport::AsyncTransport;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, trace};
use url::{form_urlencoded, Url};
use uuid::Uuid;

pub(crate) const MUSICBRAINZ_API_BASE: &str = "https://musicbrainz.org/ws/2";
pub(crate) const USER_AGENT: &str = concat!(
    "mbgraph/",
    env!("CARGO_PKG_VERSION"),
    " ( https://musicbrainz.org/doc/MusicBrainz_API )"
);

/// MusicBrainz API client with rate limiting.
#[derive(Debug, Clone)]
pub struct MusicBrainzClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl MusicBrainzClient {
    /// Create a new MusicBrainz client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> MusicBrainzClientBuilder {
        MusicBrainzClientBuilder::default()
    }

    /// Look up any entity by its identifier.
    ///
    /// # Example
    /// ```no_run
    /// # use mbgraph::{Include, MusicBrainzClient, Work};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MusicBrainzClient::new()?;
    /// let work: Work = client
    ///     .lookup("e7c3d1a2-6a3b-4f93-8a33-8f0c0a2c3c01", &[Include::Aliases])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn lookup<T: Entity>(&self, id: &str, includes: &[Include]) -> Result<T> {
        self.fetch(T::ENTITY_TYPE.endpoint(), id, includes).await
    }

    /// Look up an artist by MusicBrainz ID.
    ///
    /// # Example
    /// ```no_run
    /// # use mbgraph::MusicBrainzClient;
    /// # use uuid::Uuid;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MusicBrainzClient::new()?;
    /// let mbid = Uuid::parse_str("a74b1b7f-71a5-4011-9441-d0b5e4122711")?; // Radiohead
    /// let artist = client.lookup_artist(mbid, &[]).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn lookup_artist(&self, mbid: Uuid, includes: &[Include]) -> Result<Artist> {
        self.lookup(&mbid.to_string(), includes).await
    }

    /// Look up a release group including its artist credits.
    pub async fn lookup_release_group(&self, mbid: Uuid) -> Result<ReleaseGroup> {
        self.lookup(&mbid.to_string(), &[Include::ArtistCredits]).await
    }

    /// Look up a recording (track) by MusicBrainz ID, including artist credits and releases.
    pub async fn lookup_recording(&self, mbid: Uuid) -> Result<Recording> {
        self.lookup(
            &mbid.to_string(),
            &[Include::Artists, Include::Releases, Include::ReleaseGroups],
        )
        .await
    }

    /// Resolve a disc ID to the disc, a CD stub, or a fuzzy release match.
    pub async fn lookup_discid(&self, discid: &str, includes: &[Include]) -> Result<DiscIdLookup> {
        self.fetch("discid", discid, includes).await
    }

    pub async fn lookup_isrc(&self, isrc: &str, includes: &[Include]) -> Result<IsrcLookup> {
        self.fetch("isrc", isrc, includes).await
    }

    /// Browse entities of kind `T` linked to an anchor entity.
    ///
    /// # Example
    /// ```no_run
    /// # use mbgraph::{BrowseQuery, EntityType, MusicBrainzClient, ReleaseGroup};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MusicBrainzClient::new()?;
    /// let query = BrowseQuery::new(EntityType::Artist, "a74b1b7f-71a5-4011-9441-d0b5e4122711")
    ///     .limit(25);
    /// let mut cursor = client.browse::<ReleaseGroup>(query).await?;
    /// while cursor.has_more() {
    ///     cursor.next_page_async().await?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn browse<T: Entity>(
        &self,
        query: BrowseQuery,
    ) -> Result<Cursor<Browse<T>, &Self>> {
        let (limit, offset) = (query.limit, query.offset);
        Cursor::fetch_async(self, Browse::new(query), limit, offset).await
    }

    /// Search entities of kind `T`.
    ///
    /// # Example
    /// ```no_run
    /// # use mbgraph::{Artist, MusicBrainzClient, SearchQuery};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MusicBrainzClient::new()?;
    /// let query = SearchQuery::new("Radiohead").limit(10);
    /// let cursor = client.search::<Artist>(query).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search<T: Entity>(
        &self,
        query: SearchQuery,
    ) -> Result<Cursor<Search<T>, &Self>> {
        let (limit, offset) = (query.limit, query.offset);
        Cursor::fetch_async(self, Search::new(query), limit, offset).await
    }

    async fn fetch<T: ReadValue>(
        &self,
        endpoint: &str,
        id: &str,
        includes: &[Include],
    ) -> Result<T> {
        let query = include_query(includes);
        let body = self.perform_request_async(endpoint, Some(id), &query).await?;
        Ok(decode(&body)?)
    }

    /// Internal method to perform rate-limited GET requests.
    async fn get(&self, url: Url) -> Result<Vec<u8>> {
        self.rate_limiter.acquire().await;

        trace!(target: "musicbrainz", "GET {}", url);

        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        debug!(target: "musicbrainz", "response status: {}", status);

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(status_error(status, &url, &body));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl AsyncTransport for MusicBrainzClient {
    async fn perform_request_async(
        &self,
        endpoint: &str,
        id: Option<&str>,
        query: &str,
    ) -> Result<Vec<u8>> {
        let url = request_url(&self.base_url, endpoint, id, query)?;
        self.get(url).await
    }
}

impl Default for MusicBrainzClient {
    fn default() -> Self {
        // Default should be infallible; if building the configured client fails,
        // fall back to a basic reqwest client while keeping sensible defaults.
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        MusicBrainzClient {
            client,
            base_url: MUSICBRAINZ_API_BASE.to_string(),
            rate_limiter: RateLimiter::musicbrainz_default(),
        }
    }
}

/// `inc=` query for lookups; empty when nothing is included.
pub(crate) fn include_query(includes: &[Include]) -> String {
    if includes.is_empty() {
        return String::new();
    }
    form_urlencoded::Serializer::new(String::new())
        .append_pair("inc", &Include::join(includes))
        .finish()
}

/// `<base>/<endpoint>[/<id>]?<query>&fmt=json`
pub(crate) fn request_url(
    base_url: &str,
    endpoint: &str,
    id: Option<&str>,
    query: &str,
) -> Result<Url> {
    let mut url = Url::parse(&format!("{}/{}", base_url.trim_end_matches('/'), endpoint))
        .map_err(|e| MusicBrainzError::InvalidResponse(e.to_string()))?;

    if let Some(id) = id {
        let invalid = || MusicBrainzError::InvalidResponse(format!("invalid base URL: {base_url}"));
        url.path_segments_mut().map_err(|_| invalid())?.push(id);
    }

    if !query.is_empty() {
        url.set_query(Some(query));
    }
    url.query_pairs_mut().append_pair("fmt", "json");

    Ok(url)
}

/// Maps a non-success status to an error, reading the server's message when the body decodes.
pub(crate) fn status_error(status: StatusCode, url: &Url, body: &[u8]) -> MusicBrainzError {
    if status == StatusCode::NOT_FOUND {
        return MusicBrainzError::NotFound(url.to_string());
    }

    if status == StatusCode::SERVICE_UNAVAILABLE {
        return MusicBrainzError::RateLimitExceeded;
    }

    let message = match decode::<ErrorBody>(body) {
        Ok(error) => error.message(),
        Err(_) if body.is_empty() => "Unknown error".to_string(),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    };
    MusicBrainzError::ApiError {
        status: status.as_u16(),
        message,
    }
}

/// Builder for configuring a MusicBrainz client.
#[derive(Debug)]
pub struct MusicBrainzClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
    rate_limit_interval: Duration,
}

impl Default for MusicBrainzClientBuilder {
    fn default() -> Self {
        Self {
            base_url: MUSICBRAINZ_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            rate_limit_interval: Duration::from_secs(1),
        }
    }
}

impl MusicBrainzClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// MusicBrainz asks every application to identify itself with contact details.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set rate limit interval between requests.
    pub fn rate_limit_interval(mut self, interval: Duration) -> Self {
        self.rate_limit_interval = interval;
        self
    }

    /// Build the MusicBrainz client.
    pub fn build(self) -> Result<MusicBrainzClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;

        Ok(MusicBrainzClient {
            client,
            base_url: self.base_url,
            rate_limiter: RateLimiter::new(self.rate_limit_interval),
        })
    }

    /// Build a client for synchronous callers. Must not be called from async code.
    pub fn build_blocking(self) -> Result<BlockingMusicBrainzClient> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;

        Ok(BlockingMusicBrainzClient::new(
            client,
            self.base_url,
            RateLimiter::new(self.rate_limit_interval),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_with_id_and_query() {
        let url = request_url(
            "https://musicbrainz.org/ws/2/",
            "discid",
            Some("I5l9cCSFccLKFEKS.7wqSZAorPU-"),
            "inc=recordings",
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://musicbrainz.org/ws/2/discid/I5l9cCSFccLKFEKS.7wqSZAorPU-?inc=recordings&fmt=json"
        );
    }

    #[test]
    fn test_include_query_encoding() {
        assert_eq!(include_query(&[]), "");
        assert_eq!(
            include_query(&[Include::Aliases, Include::ArtistCredits]),
            "inc=aliases+artist-credits"
        );
    }

    #[test]
    fn test_status_error_prefers_error_body() {
        let url = Url::parse("https://musicbrainz.org/ws/2/artist/x").unwrap();
        let error = status_error(
            StatusCode::BAD_REQUEST,
            &url,
            br#"{"error": "Invalid mbid.", "help": "see docs"}"#,
        );
        assert!(matches!(
            error,
            MusicBrainzError::ApiError { status: 400, ref message } if message == "Invalid mbid. (see docs)"
        ));
        assert!(matches!(
            status_error(StatusCode::SERVICE_UNAVAILABLE, &url, b""),
            MusicBrainzError::RateLimitExceeded
        ));
    }
}
