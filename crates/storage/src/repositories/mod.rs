pub mod alert_rule_repo;

pub use alert_rule_repo::{AlertRuleRepository, AlertRuleRow};
