use async_trait::async_trait;
use common::models::Quote;

use crate::error::FetchError;

/// Upstream payload that can be turned into a [`Quote`] for a display symbol.
pub trait RemoteResponse {
    fn to_quote(&self, display_symbol: &str) -> Result<Quote, FetchError>;
}

/// Anything that can fetch a single quote. One call, one outbound request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, FetchError>;
}
