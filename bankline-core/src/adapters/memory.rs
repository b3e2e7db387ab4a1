//! In-memory account repository
//!
//! Holds the encoded bytes rather than a cloned store so that saves and loads
//! go through the same format as the file repository.

use std::cell::{Cell, RefCell};

use crate::adapters::file::{decode, encode};
use crate::domain::result::Result;
use crate::domain::AccountStore;
use crate::ports::{AccountRepository, FreshReason, LoadOutcome};

#[derive(Debug, Default)]
pub struct MemoryRepository {
    saved: RefCell<Option<Vec<u8>>>,
    saves: Cell<usize>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously saved store
    pub fn with_store(store: &AccountStore) -> Result<Self> {
        let repo = Self::new();
        *repo.saved.borrow_mut() = Some(encode(store)?);
        Ok(repo)
    }

    /// Start with arbitrary bytes, e.g. a corrupt save
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        let repo = Self::new();
        *repo.saved.borrow_mut() = Some(bytes);
        repo
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl AccountRepository for MemoryRepository {
    fn save(&self, store: &AccountStore) -> Result<()> {
        let bytes = encode(store)?;
        *self.saved.borrow_mut() = Some(bytes);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn load(&self) -> Result<LoadOutcome> {
        let saved = self.saved.borrow();
        let Some(bytes) = saved.as_deref() else {
            return Ok(LoadOutcome::fresh(FreshReason::Missing));
        };
        match decode(bytes) {
            Ok(store) => Ok(LoadOutcome::existing(store)),
            Err(e) => Ok(LoadOutcome::fresh(FreshReason::Incompatible(e.to_string()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Account;
    use crate::ports::LoadSource;
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_repository_is_fresh() {
        let repo = MemoryRepository::new();
        assert_eq!(
            repo.load().unwrap().source,
            LoadSource::Fresh(FreshReason::Missing)
        );
    }

    #[test]
    fn test_save_then_load() {
        let repo = MemoryRepository::new();
        let mut store = AccountStore::new();
        store.create(Account::new("1", "Ann", Decimal::new(10, 0), 1234));

        repo.save(&store).unwrap();

        let outcome = repo.load().unwrap();
        assert_eq!(outcome.source, LoadSource::Existing);
        assert_eq!(outcome.store, store);
        assert_eq!(repo.save_count(), 1);
    }

    #[test]
    fn test_corrupt_bytes_are_fresh() {
        let repo = MemoryRepository::with_bytes(b"BNKL\x01".to_vec());
        assert!(repo.load().unwrap().is_fresh());
    }
}
