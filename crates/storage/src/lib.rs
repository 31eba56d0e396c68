pub mod config_store;
pub mod db;
pub mod repositories;

pub use config_store::{ConfigStore, EnvConfigStore, SqliteConfigStore};
