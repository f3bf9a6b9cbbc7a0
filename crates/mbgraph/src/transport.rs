// SPDX-License-Identifier: GPL-3.0-or-later

//! The seam between cursors and whatever fetches bytes from the web service.

use async_trait::async_trait;

use crate::error::Result;

/// Synchronous request/response exchange.
///
/// `endpoint` is the resource name (`artist`, `release-group`, `discid`),
/// `id` the optional path segment after it, and `query` an already encoded
/// query string without the leading `?`.
pub trait Transport {
    fn perform_request(&self, endpoint: &str, id: Option<&str>, query: &str) -> Result<Vec<u8>>;
}

#[async_trait]
pub trait AsyncTransport: Send + Sync {
    async fn perform_request_async(
        &self,
        endpoint: &str,
        id: Option<&str>,
        query: &str,
    ) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn perform_request(&self, endpoint: &str, id: Option<&str>, query: &str) -> Result<Vec<u8>> {
        (**self).perform_request(endpoint, id, query)
    }
}

#[async_trait]
impl<T: AsyncTransport + ?Sized> AsyncTransport for &T {
    async fn perform_request_async(
        &self,
        endpoint: &str,
        id: Option<&str>,
        query: &str,
    ) -> Result<Vec<u8>> {
        (**self).perform_request_async(endpoint, id, query).await
    }
}
