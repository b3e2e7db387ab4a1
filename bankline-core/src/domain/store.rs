//! Ordered in-memory account collection

use super::account::{Account, AccountSummary};

/// All accounts known to the process, in creation order
///
/// Account numbers are not required to be unique. Lookups scan in insertion
/// order, so only the first account matching both number and PIN is reachable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account; duplicates are allowed
    pub fn create(&mut self, account: Account) -> &mut Account {
        self.accounts.push(account);
        let last = self.accounts.len() - 1;
        &mut self.accounts[last]
    }

    /// First account whose number matches and whose PIN authenticates.
    ///
    /// A wrong PIN and an unknown number both yield `None`.
    pub fn find_by_credentials(
        &mut self,
        account_number: &str,
        pin: i32,
    ) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.account_number() == account_number && a.authenticate(pin))
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn summaries(&self) -> Vec<AccountSummary> {
        self.accounts.iter().map(Account::summary).collect()
    }
}

impl From<Vec<Account>> for AccountStore {
    fn from(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}
