//! Loads the Google API credentials file.
//!
//! The file is JSON holding the OAuth client and token material the sheets client is
//! constructed from. Obtaining and refreshing these is outside this program; it only reads
//! what a prior authorization saved.

use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The saved client and token material needed to construct the sheets client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct Credentials {
    pub(super) client_id: String,
    pub(super) client_secret: String,
    #[serde(default)]
    pub(super) redirect_uri: String,
    pub(super) access_token: String,
    #[serde(default)]
    pub(super) refresh_token: String,
}

impl Credentials {
    pub(super) async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read credentials file at {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse credentials file at {}", path.display()))
    }
}
