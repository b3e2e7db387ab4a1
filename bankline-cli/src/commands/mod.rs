//! CLI command implementations

pub mod accounts;
pub mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bankline_core::config::Config;
use bankline_core::BankContext;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub data_dir: Option<PathBuf>,
    pub data_file: Option<PathBuf>,
}

/// Get the bank directory from the command line / environment or default
pub fn get_bank_dir(data_dir: Option<&Path>) -> Result<PathBuf> {
    match data_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(dirs::home_dir()
            .context("Could not find home directory")?
            .join(".bankline")),
    }
}

/// Resolve configuration and open the accounts file
pub fn get_context(args: &GlobalArgs) -> Result<BankContext> {
    let bank_dir = get_bank_dir(args.data_dir.as_deref())?;

    std::fs::create_dir_all(&bank_dir)
        .with_context(|| format!("Failed to create bank directory: {:?}", bank_dir))?;

    let mut config = Config::load(&bank_dir).context("Failed to load settings")?;
    if let Some(data_file) = &args.data_file {
        config.data_file = data_file.clone();
    }

    BankContext::with_config(&bank_dir, config).context("Failed to initialize bank context")
}
