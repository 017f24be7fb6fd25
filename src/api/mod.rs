//! The remote spreadsheet interface and its implementations.
//!
//! The pipeline only ever sees the `SheetStore` trait: range-addressed read, append and
//! update. The real backend talks to the Google Sheets API; the in-memory backend exists for
//! tests and for running the whole program without touching Google.

mod credentials;
mod google;
mod memory;

use crate::{Config, Result};
use std::env;

pub use memory::MemoryStore;

/// Row-major cell values within a spreadsheet range.
pub type Rows = Vec<Vec<String>>;

const TEST_MODE_VAR: &str = "MARKET_SYNC_IN_TEST_MODE";

/// The three range operations the pipeline needs from the remote spreadsheet.
#[async_trait::async_trait]
pub trait SheetStore {
    /// Reads the current contents of `range`. Returns `None` when the range holds no data at
    /// all, which is distinct from an empty row set.
    async fn read(&mut self, range: &str) -> Result<Option<Rows>>;

    /// Appends `rows` after the existing data in `range`.
    async fn append(&mut self, range: &str, rows: Rows) -> Result<()>;

    /// Overwrites the addressed `range` with `rows`.
    async fn update(&mut self, range: &str, rows: Rows) -> Result<()>;
}

/// Selects the spreadsheet backend.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    /// Use the Google Sheets API.
    #[default]
    Google,
    /// Use the in-memory store.
    Test,
}

impl Mode {
    /// `Mode::Test` when MARKET_SYNC_IN_TEST_MODE is set and non-zero in length, otherwise
    /// `Mode::Google`.
    pub fn from_env() -> Self {
        match env::var(TEST_MODE_VAR) {
            Ok(value) if !value.is_empty() => Mode::Test,
            _ => Mode::Google,
        }
    }
}

/// Creates the `SheetStore` for `mode`.
pub async fn store(config: &Config, mode: Mode) -> Result<Box<dyn SheetStore + Send>> {
    match mode {
        Mode::Google => Ok(Box::new(google::GoogleStore::new(config).await?)),
        Mode::Test => Ok(Box::new(MemoryStore::default())),
    }
}
