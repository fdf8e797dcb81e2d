use async_trait::async_trait;
use quotery_core::{Quote, Result};

/// Seam between the display state machine and the HTTP transport.
#[async_trait]
pub trait QuoteFetcher: Send + Sync {
    /// Fetch a random quote from the query endpoint.
    async fn fetch_random(&self) -> Result<Quote>;
}
