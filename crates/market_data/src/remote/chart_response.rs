use common::models::Quote;
use serde::Deserialize;

use crate::{error::FetchError, traits::RemoteResponse};

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub regular_market_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub chart_previous_close: Option<f64>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
}

impl RemoteResponse for ChartResponse {
    fn to_quote(&self, display_symbol: &str) -> Result<Quote, FetchError> {
        if let Some(err) = &self.chart.error {
            return Err(FetchError::Upstream {
                code: err.code.clone(),
                description: err.description.clone(),
            });
        }

        let meta = self
            .chart
            .result
            .as_ref()
            .and_then(|r| r.first())
            .map(|r| &r.meta)
            .ok_or_else(|| FetchError::NoResult(display_symbol.to_string()))?;

        let price = meta
            .regular_market_price
            .ok_or_else(|| FetchError::MissingField {
                symbol: display_symbol.to_string(),
                field: "regularMarketPrice",
            })?;

        // A zero previous close is as unusable as a missing one.
        let previous_close = meta
            .previous_close
            .filter(|p| *p > 0.0)
            .or(meta.chart_previous_close)
            .or(meta.previous_close)
            .ok_or_else(|| FetchError::MissingField {
                symbol: display_symbol.to_string(),
                field: "previousClose",
            })?;

        let name = meta.short_name.clone().or_else(|| meta.long_name.clone());

        Ok(Quote::new(display_symbol, name, price, previous_close)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChartResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn builds_quote_from_meta() {
        let response = parse(
            r#"{"chart":{"result":[{"meta":{
                "currency":"USD","symbol":"BRK-B",
                "regularMarketPrice":340.0,"previousClose":400.0,
                "chartPreviousClose":399.0,"shortName":"Berkshire Hathaway Inc. New"
            },"timestamp":[1700000000]}],"error":null}}"#,
        );

        let quote = response.to_quote("BRK.B").unwrap();
        assert_eq!(quote.symbol(), "BRK.B");
        assert_eq!(quote.name(), "Berkshire Hathaway Inc. New");
        assert_eq!(quote.previous_close(), 400.0);
        assert!((quote.change_percent() - -15.0).abs() < 1e-9);
    }

    #[test]
    fn falls_back_to_chart_previous_close_and_symbol_name() {
        let response = parse(
            r#"{"chart":{"result":[{"meta":{
                "regularMarketPrice":10.0,"chartPreviousClose":8.0
            }}],"error":null}}"#,
        );

        let quote = response.to_quote("IONQ").unwrap();
        assert_eq!(quote.previous_close(), 8.0);
        assert_eq!(quote.name(), "IONQ");
    }

    #[test]
    fn missing_price_is_an_error() {
        let response = parse(
            r#"{"chart":{"result":[{"meta":{"previousClose":8.0}}],"error":null}}"#,
        );

        assert!(matches!(
            response.to_quote("X"),
            Err(FetchError::MissingField {
                field: "regularMarketPrice",
                ..
            })
        ));
    }

    #[test]
    fn upstream_error_and_empty_result() {
        let not_found = parse(
            r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
        );
        assert!(matches!(
            not_found.to_quote("ZZZZ"),
            Err(FetchError::Upstream { .. })
        ));

        let empty = parse(r#"{"chart":{"result":[],"error":null}}"#);
        assert!(matches!(empty.to_quote("ZZZZ"), Err(FetchError::NoResult(_))));
    }

    #[test]
    fn zero_previous_close_falls_back_to_chart_previous_close() {
        let response = parse(
            r#"{"chart":{"result":[{"meta":{
                "regularMarketPrice":80.0,"previousClose":0.0,"chartPreviousClose":100.0
            }}],"error":null}}"#,
        );

        let quote = response.to_quote("X").unwrap();
        assert_eq!(quote.previous_close(), 100.0);
        assert!((quote.change_percent() - -20.0).abs() < 1e-9);
    }

    #[test]
    fn zero_previous_close_without_fallback_is_rejected() {
        let response = parse(
            r#"{"chart":{"result":[{"meta":{"regularMarketPrice":1.0,"previousClose":0.0}}],"error":null}}"#,
        );
        assert!(matches!(
            response.to_quote("X"),
            Err(FetchError::InvalidQuote(_))
        ));
    }
}
