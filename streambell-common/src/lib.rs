// streambell-common/src/lib.rs

pub mod config;
pub mod error;
pub mod models;

pub use config::AppConfig;
pub use error::Error;
