//! # Cuentaflex Repository
//!
//! Repository adapters implementing the `AccountRepository` port.
//! Accounts live in process memory; balances are lost on restart.

mod memory;

pub use memory::InMemoryAccountRepo;
