//! Account domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};
use super::transaction;

/// A customer account with its running balance and transaction log
///
/// The PIN is held and compared in plaintext. It never appears in
/// [`AccountSummary`] or in log output.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: String,
    holder_name: String,
    balance: Decimal,
    pin: i32,
    transaction_history: Vec<String>,
}

/// PIN-free view of an account for listings and JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account_number: String,
    pub holder_name: String,
    pub balance: Decimal,
    pub transactions: usize,
}

impl Account {
    /// Create a new account. No argument is validated; a negative opening
    /// balance is accepted as-is.
    pub fn new(
        account_number: impl Into<String>,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
        pin: i32,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            holder_name: holder_name.into(),
            balance: initial_balance,
            pin,
            transaction_history: vec![transaction::created(initial_balance)],
        }
    }

    /// Rebuild an account from persisted fields without appending a record
    pub(crate) fn restore(
        account_number: String,
        holder_name: String,
        balance: Decimal,
        pin: i32,
        transaction_history: Vec<String>,
    ) -> Self {
        Self {
            account_number,
            holder_name,
            balance,
            pin,
            transaction_history,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub(crate) fn pin(&self) -> i32 {
        self.pin
    }

    /// Exact PIN comparison
    pub fn authenticate(&self, entered_pin: i32) -> bool {
        self.pin == entered_pin
    }

    /// Add a strictly positive amount to the balance
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidDeposit(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(Error::AmountOverflow(amount))?;
        self.transaction_history.push(transaction::deposited(amount));
        Ok(())
    }

    /// Remove an amount in `(0, balance]` from the balance
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO || amount > self.balance {
            return Err(Error::InsufficientFunds(amount));
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(Error::AmountOverflow(amount))?;
        self.transaction_history.push(transaction::withdrawn(amount));
        Ok(())
    }

    /// Credit `balance * rate_percent / 100` and return the credited amount.
    ///
    /// A negative balance accrues negative interest. If the interest or the
    /// new balance falls outside the `Decimal` range, nothing changes.
    pub fn apply_interest(&mut self, rate_percent: Decimal) -> Result<Decimal> {
        let interest = rate_percent
            .checked_div(Decimal::ONE_HUNDRED)
            .and_then(|fraction| self.balance.checked_mul(fraction))
            .ok_or(Error::AmountOverflow(self.balance))?;
        self.balance = self
            .balance
            .checked_add(interest)
            .ok_or(Error::AmountOverflow(interest))?;
        self.transaction_history.push(transaction::interest_added(interest));
        Ok(interest)
    }

    /// Full transaction log in insertion order
    pub fn history(&self) -> &[String] {
        &self.transaction_history
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            account_number: self.account_number.clone(),
            holder_name: self.holder_name.clone(),
            balance: self.balance,
            transactions: self.transaction_history.len(),
        }
    }
}
