use serde::Serialize;

use crate::error::QuoteError;

/// Point-in-time quote for one symbol. The change figures are always derived
/// from the two stored prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    symbol: String,
    name: String,
    price: f64,
    previous_close: f64,
}

impl Quote {
    pub fn new(
        symbol: impl Into<String>,
        name: Option<String>,
        price: f64,
        previous_close: f64,
    ) -> Result<Self, QuoteError> {
        check_price("price", price)?;
        check_price("previous_close", previous_close)?;

        let symbol = symbol.into();
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| symbol.clone());

        Ok(Self {
            symbol,
            name,
            price,
            previous_close,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn previous_close(&self) -> f64 {
        self.previous_close
    }

    pub fn change(&self) -> f64 {
        self.price - self.previous_close
    }

    pub fn change_percent(&self) -> f64 {
        (self.price - self.previous_close) / self.previous_close * 100.0
    }
}

fn check_price(field: &'static str, value: f64) -> Result<(), QuoteError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(QuoteError::InvalidPrice { field, value })
    }
}
