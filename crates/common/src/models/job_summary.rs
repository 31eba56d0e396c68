use serde::Serialize;

use crate::models::DropRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    Disabled,
    NoDrops { fetched: usize },
    Alerted { fetched: usize, records: Vec<DropRecord> },
}

/// JSON body returned to whoever triggered the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSummary {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stocks: Vec<StockDrop>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockDrop {
    pub symbol: String,
    pub drop: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorSummary {
    pub error: String,
}

impl JobOutcome {
    pub fn summary(&self) -> JobSummary {
        match self {
            Self::Disabled => JobSummary {
                message: "Alerts disabled".to_string(),
                stocks: Vec::new(),
            },
            Self::NoDrops { .. } => JobSummary {
                message: "No significant drops detected".to_string(),
                stocks: Vec::new(),
            },
            Self::Alerted { records, .. } => JobSummary {
                message: "Alert sent successfully".to_string(),
                stocks: records
                    .iter()
                    .map(|r| StockDrop {
                        symbol: r.symbol().to_string(),
                        drop: r.drop_label(),
                    })
                    .collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Quote;
    use serde_json::json;

    #[test]
    fn alerted_summary_lists_symbols_with_drop() {
        let record = DropRecord {
            quote: Quote::new("BRK.B", Some("Berkshire".into()), 80.0, 100.0).unwrap(),
            rule_name: "drop".into(),
            threshold_percent: 15.0,
        };
        let outcome = JobOutcome::Alerted {
            fetched: 4,
            records: vec![record],
        };

        let value = serde_json::to_value(outcome.summary()).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "Alert sent successfully",
                "stocks": [{ "symbol": "BRK.B", "drop": "-20.00%" }]
            })
        );
    }

    #[test]
    fn quiet_outcomes_omit_stocks() {
        let disabled = serde_json::to_value(JobOutcome::Disabled.summary()).unwrap();
        assert_eq!(disabled, json!({ "message": "Alerts disabled" }));

        let none = serde_json::to_value(JobOutcome::NoDrops { fetched: 10 }.summary()).unwrap();
        assert_eq!(none, json!({ "message": "No significant drops detected" }));
    }
}
