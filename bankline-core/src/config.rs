//! Configuration management
//!
//! Settings live in `settings.json` inside the bank directory:
//! ```json
//! {
//!   "dataFile": "bank_accounts.dat",
//!   "interestRate": "5"
//! }
//! ```
//! Every field is optional and unknown keys are ignored.

use std::path::{Path, PathBuf};

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::result::Error;

pub const SETTINGS_FILE: &str = "settings.json";
pub const DEFAULT_DATA_FILE: &str = "bank_accounts.dat";

/// Environment variable overriding the accounts file location
pub const ENV_DATA_FILE: &str = "BANKLINE_DATA_FILE";
/// Environment variable overriding the interest rate (percent)
pub const ENV_INTEREST_RATE: &str = "BANKLINE_INTEREST_RATE";

/// Raw settings.json structure
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    data_file: Option<PathBuf>,
    #[serde(default)]
    interest_rate: Option<Decimal>,
}

/// Bank configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Accounts file; relative paths resolve against the bank directory
    pub data_file: PathBuf,
    /// Rate used by the "apply interest" menu entry, in percent
    pub interest_rate: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            interest_rate: Decimal::new(5, 0),
        }
    }
}

impl Config {
    /// Load config from the bank directory, applying environment overrides
    pub fn load(bank_dir: &Path) -> Result<Self> {
        Self::load_with_env(bank_dir, |key| std::env::var(key).ok())
    }

    /// Load config with a custom environment lookup
    pub fn load_with_env(bank_dir: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let settings_path = bank_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let defaults = Self::default();

        let data_file = match env(ENV_DATA_FILE) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => raw.data_file.unwrap_or(defaults.data_file),
        };

        let interest_rate = match env(ENV_INTEREST_RATE) {
            Some(rate) => rate.trim().parse::<Decimal>().map_err(|_| {
                Error::config(format!(
                    "{} must be a decimal number, got {:?}",
                    ENV_INTEREST_RATE, rate
                ))
            })?,
            None => raw.interest_rate.unwrap_or(defaults.interest_rate),
        };

        Ok(Self {
            data_file,
            interest_rate,
        })
    }

    /// Absolute location of the accounts file
    pub fn data_path(&self, bank_dir: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            bank_dir.join(&self.data_file)
        }
    }
}
