//! Bank service - account lifecycle and persistence orchestration

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::result::Result;
use crate::domain::{Account, AccountStore};
use crate::ports::{AccountRepository, LoadSource};

/// Owns the account store for the lifetime of a session
///
/// The store is loaded once in [`BankService::open`] and written back only
/// when [`BankService::save`] is called.
pub struct BankService<R: AccountRepository> {
    repository: R,
    store: AccountStore,
    loaded_from: LoadSource,
}

impl<R: AccountRepository> BankService<R> {
    /// Load the saved store, starting empty if there is none
    pub fn open(repository: R) -> Result<Self> {
        let outcome = repository.load()?;

        match &outcome.source {
            LoadSource::Existing => info!(accounts = outcome.store.len(), "accounts loaded"),
            LoadSource::Fresh(reason) => info!(%reason, "starting with an empty store"),
        }

        Ok(Self {
            repository,
            store: outcome.store,
            loaded_from: outcome.source,
        })
    }

    /// Open an account. Arguments are not validated and duplicate
    /// account numbers are accepted.
    pub fn create_account(
        &mut self,
        account_number: &str,
        holder_name: &str,
        initial_balance: Decimal,
        pin: i32,
    ) -> &Account {
        info!(account = account_number, "account created");
        self.store
            .create(Account::new(account_number, holder_name, initial_balance, pin))
    }

    /// Authenticate against the store. An unknown number and a wrong PIN
    /// are reported identically.
    pub fn login(&mut self, account_number: &str, pin: i32) -> Option<&mut Account> {
        let account = self.store.find_by_credentials(account_number, pin);
        match &account {
            Some(_) => info!(account = account_number, "login succeeded"),
            None => info!("login failed"),
        }
        account
    }

    /// Write the whole store through the repository
    pub fn save(&self) -> Result<()> {
        match self.repository.save(&self.store) {
            Ok(()) => {
                debug!(accounts = self.store.len(), "store saved");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "store save failed");
                Err(e)
            }
        }
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn loaded_from(&self) -> &LoadSource {
        &self.loaded_from
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryRepository;
    use crate::ports::FreshReason;

    #[test]
    fn test_open_empty_repository() {
        let service = BankService::open(MemoryRepository::new()).unwrap();
        assert!(service.store().is_empty());
        assert_eq!(service.loaded_from(), &LoadSource::Fresh(FreshReason::Missing));
    }

    #[test]
    fn test_create_login_and_mutate() {
        let mut service = BankService::open(MemoryRepository::new()).unwrap();
        service.create_account("1001", "Alice", Decimal::new(1000, 0), 4321);

        assert!(service.login("1001", 1).is_none());
        assert!(service.login("2002", 4321).is_none());

        let account = service.login("1001", 4321).unwrap();
        account.deposit(Decimal::new(500, 0)).unwrap();

        assert_eq!(service.store().accounts()[0].balance(), Decimal::new(1500, 0));
    }

    #[test]
    fn test_nothing_is_saved_until_save() {
        let mut service = BankService::open(MemoryRepository::new()).unwrap();
        service.create_account("1", "A", Decimal::ONE, 1);
        assert_eq!(service.repository().save_count(), 0);
        assert!(service.repository().load().unwrap().is_fresh());

        service.save().unwrap();
        assert_eq!(service.repository().save_count(), 1);

        let outcome = service.repository().load().unwrap();
        assert_eq!(&outcome.store, service.store());
    }

    #[test]
    fn test_reopen_sees_saved_accounts() {
        let mut store = AccountStore::new();
        store.create(Account::new("7", "Grace", Decimal::new(70, 0), 7070));
        let repo = MemoryRepository::with_store(&store).unwrap();

        let mut service = BankService::open(repo).unwrap();
        assert_eq!(service.loaded_from(), &LoadSource::Existing);
        assert_eq!(service.login("7", 7070).unwrap().holder_name(), "Grace");
    }
}
