// SPDX-License-Identifier: GPL-3.0-or-later

//! Resumable windows over browse and search results.
//!
//! A [`Cursor`] owns one decoded page and the transport it came from. Moving
//! the cursor re-issues the request with a new `offset`; the page it holds is
//! only replaced once the next page has been fetched and fully decoded, so a
//! failed move leaves the cursor exactly as it was.

mod browse;
mod search;

use thiserror::Error;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::error::{MusicBrainzError, Result};
use crate::json::{decode, ReadValue};
use crate::transport::{AsyncTransport, Transport};

pub use browse::{Browse, BrowsePage, BrowseQuery};
pub use search::{Search, SearchPage, SearchQuery, SearchResult};

/// A decoded result window.
pub trait Page: ReadValue {
    type Item;

    fn items(&self) -> &[Self::Item];

    /// Size of the whole result set as reported by the server.
    fn total(&self) -> usize;

    fn reported_offset(&self) -> Option<usize>;
}

/// How a kind of paged request is addressed and which page shape it returns.
pub trait PagePolicy {
    type Page: Page;

    fn endpoint(&self) -> &'static str;

    /// Adds the policy's own parameters; `limit` and `offset` are added by the cursor.
    fn append_query(&self, query: &mut form_urlencoded::Serializer<'_, String>);
}

/// A page whose contents disagree with the window that was requested.
///
/// Violations are reported, never raised: the page is installed regardless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowViolation {
    #[error("requested offset {requested} but the page reports {reported}")]
    OffsetMismatch { requested: usize, reported: usize },

    #[error("page holds {received} items but the limit is {limit}")]
    ExceedsLimit { limit: u32, received: usize },

    #[error("page at offset {offset} with {received} items runs past the total of {total}")]
    ExceedsTotal {
        offset: usize,
        received: usize,
        total: usize,
    },
}

impl WindowViolation {
    fn check(
        requested: usize,
        reported: usize,
        limit: Option<u32>,
        received: usize,
        total: usize,
    ) -> Option<Self> {
        if requested != reported {
            return Some(WindowViolation::OffsetMismatch {
                requested,
                reported,
            });
        }
        if let Some(limit) = limit {
            if received > limit as usize {
                return Some(WindowViolation::ExceedsLimit { limit, received });
            }
        }
        if reported.saturating_add(received) > total {
            return Some(WindowViolation::ExceedsTotal {
                offset: reported,
                received,
                total,
            });
        }
        None
    }
}

struct PagedRequest<P> {
    policy: P,
    limit: Option<u32>,
}

impl<P: PagePolicy> PagedRequest<P> {
    fn query(&self, offset: usize) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        self.policy.append_query(&mut query);
        if let Some(limit) = self.limit {
            query.append_pair("limit", &limit.to_string());
        }
        query.append_pair("offset", &offset.to_string());
        query.finish()
    }

    fn load<C: Transport>(&self, transport: &C, offset: usize) -> Result<P::Page> {
        let query = self.query(offset);
        transport
            .perform_request(self.policy.endpoint(), None, &query)
            .and_then(|bytes| Ok(decode::<P::Page>(&bytes)?))
            .map_err(|source| self.failed(offset, source))
    }

    async fn load_async<C: AsyncTransport>(
        &self,
        transport: &C,
        offset: usize,
    ) -> Result<P::Page> {
        let query = self.query(offset);
        transport
            .perform_request_async(self.policy.endpoint(), None, &query)
            .await
            .and_then(|bytes| Ok(decode::<P::Page>(&bytes)?))
            .map_err(|source| self.failed(offset, source))
    }

    fn failed(&self, offset: usize, source: MusicBrainzError) -> MusicBrainzError {
        MusicBrainzError::Paging {
            offset,
            limit: self.limit,
            source: Box::new(source),
        }
    }
}

/// A position in a paged result set, holding the current page.
pub struct Cursor<P: PagePolicy, C> {
    request: PagedRequest<P>,
    transport: C,
    page: P::Page,
    offset: usize,
    next_offset: Option<usize>,
    violation: Option<WindowViolation>,
}

impl<P: PagePolicy, C> Cursor<P, C> {
    fn install(request: PagedRequest<P>, transport: C, requested: usize, page: P::Page) -> Self {
        let mut cursor = Cursor {
            request,
            transport,
            page,
            offset: requested,
            next_offset: None,
            violation: None,
        };
        cursor.settle(requested);
        cursor
    }

    fn replace(&mut self, requested: usize, page: P::Page) {
        self.page = page;
        self.settle(requested);
    }

    fn settle(&mut self, requested: usize) {
        self.offset = self.page.reported_offset().unwrap_or(requested);
        let received = self.page.items().len();
        let total = self.page.total();
        self.violation =
            WindowViolation::check(requested, self.offset, self.request.limit, received, total);
        if let Some(violation) = &self.violation {
            warn!(
                target: "musicbrainz",
                endpoint = self.request.policy.endpoint(),
                "inconsistent result window: {}",
                violation
            );
        }
        debug!(
            target: "musicbrainz",
            endpoint = self.request.policy.endpoint(),
            offset = self.offset,
            received,
            total,
            "installed page"
        );
    }

    fn take_next_offset(&mut self) -> (Option<usize>, usize) {
        let pending = self.next_offset.take();
        let offset = pending.unwrap_or_else(|| self.end_of_page());
        (pending, offset)
    }

    /// Offset just past the current page; saturates on a bogus reported offset.
    fn end_of_page(&self) -> usize {
        self.offset.saturating_add(self.page.items().len())
    }

    fn take_previous_offset(&mut self) -> (Option<usize>, usize) {
        let pending = self.next_offset.take();
        (pending, pending.unwrap_or(self.offset))
    }

    fn settle_move(
        &mut self,
        pending: Option<usize>,
        offset: usize,
        loaded: Result<P::Page>,
    ) -> Result<()> {
        match loaded {
            Ok(page) => {
                self.replace(offset, page);
                Ok(())
            }
            Err(error) => {
                self.next_offset = pending;
                Err(error)
            }
        }
    }

    pub fn results(&self) -> &[<P::Page as Page>::Item] {
        self.page.items()
    }

    pub fn total_results(&self) -> usize {
        self.page.total()
    }

    /// Offset of the first result of the current page.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> Option<u32> {
        self.request.limit
    }

    /// Changes the page size for subsequent requests. Values outside the
    /// server's 1 to 100 range are sent as they are.
    pub fn set_limit(&mut self, limit: Option<u32>) {
        self.request.limit = limit;
    }

    /// Overrides the offset of the next request, whichever direction it moves.
    pub fn set_next_offset(&mut self, offset: usize) {
        self.next_offset = Some(offset);
    }

    pub fn has_more(&self) -> bool {
        self.end_of_page() < self.page.total()
    }

    pub fn page(&self) -> &P::Page {
        &self.page
    }

    pub fn into_page(self) -> P::Page {
        self.page
    }

    pub fn policy(&self) -> &P {
        &self.request.policy
    }

    pub fn window_violation(&self) -> Option<&WindowViolation> {
        self.violation.as_ref()
    }
}

impl<P: PagePolicy, C: Transport> Cursor<P, C> {
    /// Requests the first window and wraps it in a cursor.
    pub fn fetch(transport: C, policy: P, limit: Option<u32>, offset: usize) -> Result<Self> {
        let request = PagedRequest { policy, limit };
        let page = request.load(&transport, offset)?;
        Ok(Self::install(request, transport, offset, page))
    }

    pub fn next_page(&mut self) -> Result<()> {
        let (pending, offset) = self.take_next_offset();
        let loaded = self.request.load(&self.transport, offset);
        self.settle_move(pending, offset, loaded)
    }

    /// Re-requests the window at the current offset unless an override is pending.
    pub fn previous_page(&mut self) -> Result<()> {
        let (pending, offset) = self.take_previous_offset();
        let loaded = self.request.load(&self.transport, offset);
        self.settle_move(pending, offset, loaded)
    }
}

impl<P: PagePolicy, C: AsyncTransport> Cursor<P, C> {
    pub async fn fetch_async(
        transport: C,
        policy: P,
        limit: Option<u32>,
        offset: usize,
    ) -> Result<Self> {
        let request = PagedRequest { policy, limit };
        let page = request.load_async(&transport, offset).await?;
        Ok(Self::install(request, transport, offset, page))
    }

    pub async fn next_page_async(&mut self) -> Result<()> {
        let (pending, offset) = self.take_next_offset();
        let loaded = self.request.load_async(&self.transport, offset).await;
        self.settle_move(pending, offset, loaded)
    }

    pub async fn previous_page_async(&mut self) -> Result<()> {
        let (pending, offset) = self.take_previous_offset();
        let loaded = self.request.load_async(&self.transport, offset).await;
        self.settle_move(pending, offset, loaded)
    }
}
