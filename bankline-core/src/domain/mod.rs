//! Core domain entities
//!
//! Pure data structures with their state-transition rules - no I/O.

mod account;
mod store;
pub mod result;
pub mod transaction;

pub use account::{Account, AccountSummary};
pub use store::AccountStore;
