//! Adapter implementations
//!
//! Adapters implement the port traits with concrete storage:
//! - Versioned flat file for the AccountRepository port
//! - In-memory bytes for embedding and tests

pub mod file;
pub mod memory;
