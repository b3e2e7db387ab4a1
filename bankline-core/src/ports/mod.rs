//! Port definitions
//!
//! Ports define the interfaces for external dependencies. Services depend
//! only on these traits, not on concrete implementations.

mod repository;

pub use repository::{AccountRepository, FreshReason, LoadOutcome, LoadSource};
