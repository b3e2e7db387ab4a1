//! Repository port - account persistence abstraction

use std::fmt;

use crate::domain::result::Result;
use crate::domain::AccountStore;

/// Why a load started from an empty store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreshReason {
    /// Nothing has been saved yet
    Missing,
    /// The file exists but could not be read
    Unreadable(String),
    /// The file was read but is not a store this build understands
    Incompatible(String),
}

impl fmt::Display for FreshReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no saved accounts"),
            Self::Unreadable(e) => write!(f, "unreadable: {}", e),
            Self::Incompatible(e) => write!(f, "incompatible: {}", e),
        }
    }
}

/// Where a loaded store came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Existing,
    Fresh(FreshReason),
}

/// Result of [`AccountRepository::load`]
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub store: AccountStore,
    pub source: LoadSource,
}

impl LoadOutcome {
    pub fn existing(store: AccountStore) -> Self {
        Self {
            store,
            source: LoadSource::Existing,
        }
    }

    pub fn fresh(reason: FreshReason) -> Self {
        Self {
            store: AccountStore::new(),
            source: LoadSource::Fresh(reason),
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self.source, LoadSource::Fresh(_))
    }
}

/// Whole-store persistence
///
/// Implementations write and read the complete ordered account list in one
/// piece. There is no per-account update.
pub trait AccountRepository {
    /// Replace any previously saved store with `store`
    fn save(&self, store: &AccountStore) -> Result<()>;

    /// Load the saved store.
    ///
    /// A missing or unusable save yields an empty store with
    /// [`LoadSource::Fresh`] rather than an error. `Err` is reserved for
    /// conditions the caller cannot recover by starting empty.
    fn load(&self) -> Result<LoadOutcome>;
}
