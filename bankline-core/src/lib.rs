//! Bankline Core - account, store and persistence logic for a console bank
//!
//! - **domain**: Account, AccountStore and their state transitions
//! - **ports**: Trait definitions for external dependencies (AccountRepository)
//! - **services**: Orchestration over the store and repository
//! - **adapters**: Concrete repositories (versioned flat file, in-memory)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use anyhow::{Context, Result};

use adapters::file::FileRepository;
use config::Config;
use services::BankService;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Account, AccountStore, AccountSummary};
pub use ports::{AccountRepository, FreshReason, LoadOutcome, LoadSource};

/// Main context for bank operations
///
/// Holds the resolved configuration and a service over the file repository.
pub struct BankContext {
    pub config: Config,
    pub bank_service: BankService<FileRepository>,
}

impl BankContext {
    /// Open the accounts file named by an already resolved configuration
    pub fn with_config(bank_dir: &Path, config: Config) -> Result<Self> {
        let data_path = config.data_path(bank_dir);
        let bank_service = BankService::open(FileRepository::new(&data_path))
            .with_context(|| format!("Failed to open accounts file: {:?}", data_path))?;

        Ok(Self {
            config,
            bank_service,
        })
    }

    /// Location of the accounts file
    pub fn data_path(&self) -> &Path {
        self.bank_service.repository().path()
    }
}
