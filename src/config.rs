//! Configuration file handling.
//!
//! The configuration is a YAML document naming the target spreadsheet, the two sheet ranges and
//! their title-only sub-ranges, the packaging-marker word with its five-ounce price list, and
//! the item catalog used to build the summary sheet.
//!
//! The loaded `Config` value is passed explicitly into every component that needs it; nothing
//! reads configuration through globals.

use crate::error::Result;
use anyhow::{ensure, Context};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_INPUT_DIR: &str = "FILES HERE";
const DEFAULT_CREDENTIALS: &str = "keys.json";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to the YAML configuration file.
#[derive(Debug, Clone)]
pub struct Config {
    file: ConfigFile,
}

impl Config {
    /// Loads and validates the configuration from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to load config file at {}", path.display()))
    }

    /// Parses the configuration from YAML text.
    pub(crate) fn from_yaml(content: &str) -> Result<Self> {
        let file: ConfigFile =
            serde_yaml::from_str(content).context("Failed to parse config YAML")?;
        ensure!(
            !file.spreadsheet_id.is_empty(),
            "spreadsheet_id must not be empty"
        );
        ensure!(
            !file.ounce_differentiator.is_empty(),
            "ounce_differentiator must not be empty"
        );
        Ok(Self { file })
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.file.spreadsheet_id
    }

    /// The marker word identifying titles sold in both 3oz and 5oz packaging.
    pub fn ounce_differentiator(&self) -> &str {
        &self.file.ounce_differentiator
    }

    /// Prices that indicate the 5oz packaging of a marked title.
    pub fn five_ounce_prices(&self) -> &[Decimal] {
        &self.file.five_ounce_prices
    }

    /// The transaction-log value range.
    pub fn sheet1_range(&self) -> &str {
        &self.file.sheet1_range
    }

    /// The title-only sub-range of the transaction log.
    pub fn sheet1_title_range(&self) -> &str {
        &self.file.sheet1_title_range
    }

    /// The summary value range.
    pub fn sheet2_range(&self) -> &str {
        &self.file.sheet2_range
    }

    /// The title-only sub-range of the summary sheet.
    pub fn sheet2_title_range(&self) -> &str {
        &self.file.sheet2_title_range
    }

    /// The item catalog, in configuration order.
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.file.item_data
    }

    /// The directory holding the point-of-sale CSV exports.
    pub fn input_dir(&self) -> PathBuf {
        self.file
            .input_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
    }

    /// The path to the Google API credentials file.
    pub fn credentials_path(&self) -> PathBuf {
        self.file
            .credentials_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CREDENTIALS))
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```yaml
/// spreadsheet_id: 7KpXm2RfZwNJgs84QhVYno5DU6iM9Wlr3bCzAv1txRpL
/// ounce_differentiator: Candle
/// five_ounce_prices: [9.99, 10.99]
/// sheet1_range: Sheet1!A:C
/// sheet1_title_range: Sheet1!A:A
/// sheet2_range: Sheet2!B:D
/// sheet2_title_range: Sheet2!A:A
/// item_data:
///   - title: Lavender (5oz)
///     make_cost: 3.25
///     selling_price: 9.99
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct ConfigFile {
    /// The id of the target Google spreadsheet.
    spreadsheet_id: String,

    /// The word marking titles that exist in both 3oz and 5oz packaging.
    ounce_differentiator: String,

    /// Prices indicating the 5oz packaging.
    five_ounce_prices: Vec<Decimal>,

    /// Transaction-log value range.
    sheet1_range: String,

    /// Transaction-log title column.
    sheet1_title_range: String,

    /// Summary value range.
    sheet2_range: String,

    /// Summary title column.
    sheet2_title_range: String,

    /// The item catalog joined against sale counts when building the summary.
    item_data: Vec<CatalogEntry>,

    /// Directory of CSV exports (optional, defaults to "FILES HERE").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_dir: Option<PathBuf>,

    /// Path to the Google API credentials file (optional, defaults to "keys.json").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credentials_path: Option<PathBuf>,
}

/// One configured catalog item. Looked up by exact title match when building summary rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    title: String,
    make_cost: Decimal,
    selling_price: Decimal,
}

impl CatalogEntry {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn make_cost(&self) -> Decimal {
        self.make_cost
    }

    pub fn selling_price(&self) -> Decimal {
        self.selling_price
    }
}

#[cfg(test)]
impl CatalogEntry {
    pub(crate) fn new(
        title: impl Into<String>,
        make_cost: Decimal,
        selling_price: Decimal,
    ) -> Self {
        Self {
            title: title.into(),
            make_cost,
            selling_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const CONFIG_YAML: &str = r#"
spreadsheet_id: 7KpXm2RfZwNJgs84QhVYno5DU6iM9Wlr3bCzAv1txRpL
ounce_differentiator: Candle
five_ounce_prices: [9.99, 10.99]
sheet1_range: Sheet1!A:C
sheet1_title_range: Sheet1!A:A
sheet2_range: Sheet2!B:D
sheet2_title_range: Sheet2!A:A
item_data:
  - title: Lavender (5oz)
    make_cost: 3.25
    selling_price: 9.99
  - title: Lavender (3oz)
    make_cost: 2.1
    selling_price: 4.99
"#;

    #[test]
    fn test_config_from_yaml() {
        let config = Config::from_yaml(CONFIG_YAML).unwrap();
        assert_eq!(
            config.spreadsheet_id(),
            "7KpXm2RfZwNJgs84QhVYno5DU6iM9Wlr3bCzAv1txRpL"
        );
        assert_eq!(config.ounce_differentiator(), "Candle");
        assert_eq!(
            config.five_ounce_prices(),
            &[
                Decimal::from_str("9.99").unwrap(),
                Decimal::from_str("10.99").unwrap()
            ]
        );
        assert_eq!(config.sheet1_range(), "Sheet1!A:C");
        assert_eq!(config.sheet2_title_range(), "Sheet2!A:A");
        assert_eq!(config.catalog().len(), 2);
        assert_eq!(config.catalog()[1].title(), "Lavender (3oz)");
        assert_eq!(
            config.catalog()[1].make_cost(),
            Decimal::from_str("2.1").unwrap()
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_yaml(CONFIG_YAML).unwrap();
        assert_eq!(config.input_dir(), PathBuf::from("FILES HERE"));
        assert_eq!(config.credentials_path(), PathBuf::from("keys.json"));
    }

    #[test]
    fn test_config_optional_paths() {
        let yaml = format!("{CONFIG_YAML}\ninput_dir: exports\ncredentials_path: secret.json\n");
        let config = Config::from_yaml(&yaml).unwrap();
        assert_eq!(config.input_dir(), PathBuf::from("exports"));
        assert_eq!(config.credentials_path(), PathBuf::from("secret.json"));
    }

    #[test]
    fn test_config_rejects_empty_spreadsheet_id() {
        let yaml = CONFIG_YAML.replace(
            "spreadsheet_id: 7KpXm2RfZwNJgs84QhVYno5DU6iM9Wlr3bCzAv1txRpL",
            "spreadsheet_id: \"\"",
        );
        assert!(Config::from_yaml(&yaml).is_err());
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Config::load(dir.path().join("nope.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, CONFIG_YAML).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.ounce_differentiator(), "Candle");
    }
}
