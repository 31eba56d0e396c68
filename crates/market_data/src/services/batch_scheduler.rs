use std::time::Duration;

use common::models::Quote;
use futures_util::future::join_all;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::traits::QuoteSource;

/// Fetches a symbol universe in fixed-size batches with a fixed pause in
/// between. Symbols inside a batch are fetched concurrently; failed symbols
/// are logged and left out.
pub struct BatchScheduler<S> {
    source: S,
    batch_size: usize,
    batch_delay: Duration,
}

impl<S: QuoteSource> BatchScheduler<S> {
    /// `batch_size` of zero is treated as one.
    pub fn new(source: S, batch_size: usize, batch_delay: Duration) -> Self {
        Self {
            source,
            batch_size: batch_size.max(1),
            batch_delay,
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub async fn fetch_all(&self, symbols: &[String]) -> Vec<Quote> {
        let mut quotes = Vec::with_capacity(symbols.len());
        let mut failed = 0usize;
        let batch_count = symbols.len().div_ceil(self.batch_size);

        for (i, batch) in symbols.chunks(self.batch_size).enumerate() {
            if i > 0 {
                sleep(self.batch_delay).await;
            }

            debug!("Fetching batch {}/{} ({} symbols)", i + 1, batch_count, batch.len());

            let results = join_all(batch.iter().map(|s| self.source.fetch_quote(s))).await;

            for (symbol, result) in batch.iter().zip(results) {
                match result {
                    Ok(quote) => quotes.push(quote),
                    Err(e) => {
                        failed += 1;
                        warn!("Error fetching {}: {}", symbol, e);
                    }
                }
            }
        }

        info!(
            "Successfully fetched {} of {} stocks ({} failed)",
            quotes.len(),
            symbols.len(),
            failed
        );

        quotes
    }
}
