use common::QuoteError;
use thiserror::Error;

/// Failure to produce a quote for one symbol. Never fatal to a run.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Upstream error {code}: {description}")]
    Upstream { code: String, description: String },
    #[error("No chart result for {0}")]
    NoResult(String),
    #[error("Missing field {field} for {symbol}")]
    MissingField { symbol: String, field: &'static str },
    #[error("Invalid quote: {0}")]
    InvalidQuote(#[from] QuoteError),
    #[error("Invalid chart base URL '{0}'")]
    InvalidBaseUrl(String),
    #[error("Invalid symbol '{0}'")]
    InvalidSymbol(String),
}
