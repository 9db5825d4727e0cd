//! The HTTP seam: anything that can GET a URL and hand back status and body.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::errors::TransportError;
use crate::response::RawResponse;

/// Request timeout for the default transport.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Issues a GET for a fully built URL (query included).
///
/// Implementations must not interpret the body or the status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, url: Url) -> Result<RawResponse, TransportError> {
        (**self).get(url).await
    }
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tdf_api/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Box::new(e) as TransportError
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<RawResponse, TransportError> {
        let resp = self
            .client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(RawResponse { status, body })
    }
}
