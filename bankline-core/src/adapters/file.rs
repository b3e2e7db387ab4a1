//! Flat-file account repository
//!
//! File layout (all integers little-endian):
//!
//! ```text
//! +-------+----------------+---------------------+------------------------+
//! | magic | schema version | payload length      | payload                |
//! | BNKL  | u16            | u64                 | bincode Vec<Record>    |
//! +-------+----------------+---------------------+------------------------+
//! ```
//!
//! The payload is the whole ordered account list. Saves overwrite the file
//! in place; there is no journal or checksum, so an interrupted save can leave
//! a truncated file, which the next load treats as incompatible.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, AccountStore};
use crate::ports::{AccountRepository, FreshReason, LoadOutcome};

pub const MAGIC: &[u8; 4] = b"BNKL";
pub const SCHEMA_VERSION: u16 = 1;

const HEADER_LEN: usize = 4 + 2 + 8;

/// On-disk shape of one account
#[derive(Debug, Serialize, Deserialize)]
struct AccountRecord {
    account_number: String,
    holder_name: String,
    /// `Decimal::serialize` bytes; exact and independent of serde feature flags
    balance: [u8; 16],
    pin: i32,
    transaction_history: Vec<String>,
}

impl From<&Account> for AccountRecord {
    fn from(account: &Account) -> Self {
        Self {
            account_number: account.account_number().to_string(),
            holder_name: account.holder_name().to_string(),
            balance: account.balance().serialize(),
            pin: account.pin(),
            transaction_history: account.history().to_vec(),
        }
    }
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Account::restore(
            record.account_number,
            record.holder_name,
            Decimal::deserialize(record.balance),
            record.pin,
            record.transaction_history,
        )
    }
}

/// Encode a store into the versioned file format
pub fn encode(store: &AccountStore) -> Result<Vec<u8>> {
    let records: Vec<AccountRecord> = store.iter().map(AccountRecord::from).collect();
    let payload = bincode::serialize(&records)?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(MAGIC);
    bytes.extend_from_slice(&SCHEMA_VERSION.to_le_bytes());
    bytes.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode the versioned file format back into a store
pub fn decode(bytes: &[u8]) -> Result<AccountStore> {
    if bytes.len() < HEADER_LEN {
        return Err(Error::format(format!(
            "file is {} bytes, shorter than the {} byte header",
            bytes.len(),
            HEADER_LEN
        )));
    }

    let (magic, rest) = bytes.split_at(4);
    if magic != MAGIC {
        return Err(Error::format("not a bankline accounts file"));
    }

    let (version, rest) = rest.split_at(2);
    let version = u16::from_le_bytes([version[0], version[1]]);
    if version != SCHEMA_VERSION {
        return Err(Error::format(format!(
            "unsupported schema version {} (expected {})",
            version, SCHEMA_VERSION
        )));
    }

    let (len, payload) = rest.split_at(8);
    let mut len_bytes = [0u8; 8];
    len_bytes.copy_from_slice(len);
    let declared = u64::from_le_bytes(len_bytes);
    if declared != payload.len() as u64 {
        return Err(Error::format(format!(
            "payload is {} bytes, header declares {}",
            payload.len(),
            declared
        )));
    }

    let records: Vec<AccountRecord> = bincode::deserialize(payload)?;
    Ok(records.into_iter().map(Account::from).collect::<Vec<_>>().into())
}

/// Repository backed by a single file
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountRepository for FileRepository {
    fn save(&self, store: &AccountStore) -> Result<()> {
        let bytes = encode(store)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, &bytes)?;

        debug!(
            path = %self.path.display(),
            accounts = store.len(),
            bytes = bytes.len(),
            "saved accounts file"
        );
        Ok(())
    }

    fn load(&self) -> Result<LoadOutcome> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no accounts file");
                return Ok(LoadOutcome::fresh(FreshReason::Missing));
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "accounts file unreadable");
                return Ok(LoadOutcome::fresh(FreshReason::Unreadable(e.to_string())));
            }
        };

        match decode(&bytes) {
            Ok(store) => {
                debug!(path = %self.path.display(), accounts = store.len(), "loaded accounts file");
                Ok(LoadOutcome::existing(store))
            }
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "accounts file incompatible");
                Ok(LoadOutcome::fresh(FreshReason::Incompatible(e.to_string())))
            }
        }
    }
}
