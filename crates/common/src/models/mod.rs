pub mod alert_config;
pub mod drop_record;
pub mod job_summary;
pub mod quote;

pub use alert_config::{AlertConfig, AlertRule};
pub use drop_record::DropRecord;
pub use job_summary::{ErrorSummary, JobOutcome, JobSummary, StockDrop};
pub use quote::Quote;
