pub mod alert_job;
pub mod slack_service;
