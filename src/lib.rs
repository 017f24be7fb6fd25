mod aggregate;
pub mod api;
pub mod args;
pub mod commands;
mod config;
mod dedup;
mod error;
mod ingest;
mod model;
mod rows;
mod summary;
mod utils;

pub use config::Config;
pub use error::Error;
pub use error::Result;
