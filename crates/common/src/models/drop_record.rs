use serde::Serialize;

use crate::models::Quote;

/// A quote that crossed the threshold of an enabled rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropRecord {
    pub quote: Quote,
    pub rule_name: String,
    pub threshold_percent: f64,
}

impl DropRecord {
    pub fn symbol(&self) -> &str {
        self.quote.symbol()
    }

    pub fn change_percent(&self) -> f64 {
        self.quote.change_percent()
    }

    /// Drop formatted the way alerts and summaries show it, e.g. `-20.00%`.
    pub fn drop_label(&self) -> String {
        format!("{:.2}%", self.change_percent())
    }
}
