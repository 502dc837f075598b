//! Domain models for the deposit service.

pub mod account;
pub mod fees;
pub mod transaction;

pub use account::{Account, AccountId};
pub use fees::FeesValues;
pub use transaction::{TransactionDone, TransactionId, TransactionRequest};
