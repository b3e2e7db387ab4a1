//! Service layer - business logic orchestration

mod bank;

pub use bank::BankService;
