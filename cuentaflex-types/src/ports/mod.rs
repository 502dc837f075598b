//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod fees;
mod repository;
mod use_case;

pub use fees::FeeSchedule;
pub use repository::AccountRepository;
pub use use_case::DepositFromAtmUseCase;
