//! HTTP transport abstraction.
//!
//! The client only needs one capability from the network: perform a GET with
//! query parameters and hand back the raw body, failing on any non-success
//! status. [`Transport`] captures that so tests can swap in an in-memory
//! implementation, and [`ReqwestTransport`] is the production one.
//!
//! Timeouts, TLS, redirects, and connection pooling are owned by the
//! transport. The client imposes none of its own.

mod errors;

pub use errors::TransportError;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::request::RequestParams;

/// Performs one GET request and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `params` as the query string of a GET to `base_url`.
    ///
    /// # Returns
    ///
    /// * `Ok(body)` - The full body of a 2xx response.
    /// * `Err(TransportError)` - On connection failure or a non-2xx status.
    async fn get(&self, base_url: &str, params: &RequestParams) -> Result<Vec<u8>, TransportError>;
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wraps an existing client, keeping whatever policy it was built with.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client with an overall request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, base_url: &str, params: &RequestParams) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(base_url)
            .query(&params.pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            warn!(%status, function = params.function(), "non-success response");
            return Err(TransportError::Status { status, body });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
