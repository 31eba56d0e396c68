use std::time::Duration;

use async_trait::async_trait;
use common::models::Quote;
use reqwest::{
    Client,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT},
};
use tracing::debug;
use url::Url;

use crate::{
    error::FetchError,
    remote::{chart_response::ChartResponse, normalize_symbol},
    traits::{QuoteSource, RemoteResponse},
};

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Quote source backed by the Yahoo Finance chart endpoint.
#[derive(Clone)]
pub struct YahooClient {
    client: Client,
    base_url: Url,
}

impl YahooClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        let base_url =
            Url::parse(base_url).map_err(|_| FetchError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn chart_url(&self, symbol: &str) -> Result<Url, FetchError> {
        let normalized = normalize_symbol(symbol);
        if normalized.is_empty() {
            return Err(FetchError::InvalidSymbol(symbol.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidSymbol(symbol.to_string()))?
            .pop_if_empty()
            .push(&normalized);
        url.query_pairs_mut()
            .append_pair("range", "1d")
            .append_pair("interval", "1d");

        Ok(url)
    }

    async fn make_request(&self, url: Url) -> Result<ChartResponse, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate(&body, 200),
            });
        }

        Ok(serde_json::from_str::<ChartResponse>(&body)?)
    }
}

#[async_trait]
impl QuoteSource for YahooClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, FetchError> {
        let url = self.chart_url(symbol)?;
        debug!("Fetching {}", url);

        let response = self.make_request(url).await?;
        response.to_quote(symbol)
    }
}

fn truncate(body: &str, max_chars: usize) -> String {
    body.chars().take(max_chars).collect()
}
