pub mod error;
pub mod logger;
pub mod models;
pub mod settings;

pub use error::{AlertError, QuoteError, RuleError};
