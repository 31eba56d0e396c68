pub mod error;
pub mod remote;
pub mod services;
pub mod traits;
pub mod universe;

pub use error::FetchError;
pub use traits::{QuoteSource, RemoteResponse};
