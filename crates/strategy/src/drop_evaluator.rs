use common::models::{AlertConfig, AlertRule, DropRecord, Quote};
use tracing::{debug, info};

/// Picks the quotes that crossed an enabled drop rule and ranks them,
/// biggest drop first.
#[derive(Debug, Clone, Default)]
pub struct DropEvaluator {
    max_alerts: Option<usize>,
}

impl DropEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the `max` biggest drops. `None` keeps every qualifying quote.
    pub fn with_max_alerts(mut self, max: Option<usize>) -> Self {
        self.max_alerts = max;
        self
    }

    pub fn evaluate(&self, quotes: &[Quote], config: &AlertConfig) -> Vec<DropRecord> {
        let mut records: Vec<DropRecord> = quotes
            .iter()
            .filter_map(|quote| {
                strictest_match(config, quote.change_percent()).map(|rule| DropRecord {
                    quote: quote.clone(),
                    rule_name: rule.name.clone(),
                    threshold_percent: rule.threshold_percent,
                })
            })
            .collect();

        // stable: equal drops keep input order
        records.sort_by(|a, b| a.change_percent().total_cmp(&b.change_percent()));

        let qualifying = records.len();
        if let Some(max) = self.max_alerts {
            records.truncate(max);
        }

        info!(
            "Found {} stocks past threshold ({} reported)",
            qualifying,
            records.len()
        );
        for r in &records {
            debug!("{} {} via rule '{}'", r.symbol(), r.drop_label(), r.rule_name);
        }

        records
    }
}

/// Among enabled rules matching the change, the one with the largest threshold.
fn strictest_match(config: &AlertConfig, change_percent: f64) -> Option<&AlertRule> {
    config
        .enabled_rules()
        .filter(|rule| rule.matches(change_percent))
        .max_by(|a, b| a.threshold_percent.total_cmp(&b.threshold_percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(symbol: &str, change_percent: f64) -> Quote {
        Quote::new(symbol, None, 100.0 + change_percent, 100.0).unwrap()
    }

    fn symbols(records: &[DropRecord]) -> Vec<&str> {
        records.iter().map(|r| r.symbol()).collect()
    }

    #[test]
    fn keeps_only_quotes_at_or_below_threshold() {
        let config = AlertConfig::single(true, 15.0).unwrap();
        let quotes = vec![
            quote("A", -3.0),
            quote("B", -20.0),
            quote("D", -1.0),
            quote("E", -16.0),
            quote("F", 18.0),
        ];

        let records = DropEvaluator::new().evaluate(&quotes, &config);

        assert_eq!(symbols(&records), vec!["B", "E"]);
        assert!(records.iter().all(|r| r.change_percent() <= -15.0));
    }

    #[test]
    fn output_matches_filter_definition_for_many_thresholds() {
        let quotes: Vec<Quote> = [-42.0, -0.5, 0.0, 3.0, -15.0, -7.25, -99.0, -7.25]
            .iter()
            .enumerate()
            .map(|(i, cp)| quote(&format!("S{i}"), *cp))
            .collect();

        for threshold in [0.0, 0.5, 7.25, 15.0, 50.0, 100.0] {
            let config = AlertConfig::single(true, threshold).unwrap();
            let records = DropEvaluator::new().evaluate(&quotes, &config);

            let mut expected: Vec<&Quote> = quotes
                .iter()
                .filter(|q| q.change_percent() <= -threshold)
                .collect();
            expected.sort_by(|a, b| a.change_percent().total_cmp(&b.change_percent()));

            let got: Vec<&str> = symbols(&records);
            let want: Vec<&str> = expected.iter().map(|q| q.symbol()).collect();
            assert_eq!(got, want, "threshold {threshold}");
            assert!(
                records
                    .windows(2)
                    .all(|w| w[0].change_percent() <= w[1].change_percent())
            );
        }
    }

    #[test]
    fn ties_keep_input_order() {
        let config = AlertConfig::single(true, 5.0).unwrap();
        let quotes = vec![quote("X", -10.0), quote("Y", -30.0), quote("Z", -10.0)];

        let records = DropEvaluator::new().evaluate(&quotes, &config);
        assert_eq!(symbols(&records), vec!["Y", "X", "Z"]);
    }

    #[test]
    fn nothing_to_report_is_not_an_error() {
        let config = AlertConfig::single(true, 15.0).unwrap();
        let evaluator = DropEvaluator::new();

        assert!(evaluator.evaluate(&[], &config).is_empty());
        assert!(
            evaluator
                .evaluate(&[quote("A", 1.0), quote("B", 12.0)], &config)
                .is_empty()
        );
    }

    #[test]
    fn caps_to_biggest_drops() {
        let config = AlertConfig::single(true, 5.0).unwrap();
        let quotes = vec![
            quote("A", -6.0),
            quote("B", -40.0),
            quote("C", -9.0),
            quote("D", -22.0),
        ];

        let records = DropEvaluator::new()
            .with_max_alerts(Some(3))
            .evaluate(&quotes, &config);
        assert_eq!(symbols(&records), vec!["B", "D", "C"]);
    }

    #[test]
    fn disabled_rules_never_match() {
        let config = AlertConfig::single(false, 1.0).unwrap();
        let records = DropEvaluator::new().evaluate(&[quote("A", -50.0)], &config);
        assert!(records.is_empty());
    }

    #[test]
    fn tags_each_quote_with_its_strictest_rule() {
        let config = AlertConfig::new(vec![
            AlertRule::new("warning", true, 5.0).unwrap(),
            AlertRule::new("crash", true, 15.0).unwrap(),
            AlertRule::new("muted", false, 30.0).unwrap(),
        ])
        .unwrap();
        let quotes = vec![quote("A", -7.0), quote("B", -35.0), quote("C", -2.0)];

        let records = DropEvaluator::new().evaluate(&quotes, &config);

        let tagged: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.symbol(), r.rule_name.as_str()))
            .collect();
        assert_eq!(tagged, vec![("B", "crash"), ("A", "warning")]);
        assert_eq!(records[0].threshold_percent, 15.0);
    }
}
