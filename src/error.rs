//! Crate-wide error aliases. Everything propagates `anyhow` errors with context.

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;
