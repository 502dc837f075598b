//! # Cuentaflex Types
//!
//! Domain types and port traits for the Cuentaflex deposit service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Account, TransactionRequest, TransactionDone, fees)
//! - `outcome/` - The success/failure result returned by use cases
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - DIN envelopes and other API boundary shapes
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod outcome;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Account, AccountId, FeesValues, TransactionDone, TransactionId, TransactionRequest,
};
pub use dto::*;
pub use error::{AppError, DomainError, ErrorCode, FeeError, RepoError, UnrecognizedCode};
pub use outcome::Outcome;
pub use ports::{AccountRepository, DepositFromAtmUseCase, FeeSchedule};
