//! # Cuentaflex Hex
//!
//! Application service layer and HTTP adapter for the deposit service.
//!
//! ## Architecture
//!
//! - `service/` - Application services (account management, ATM deposit use case)
//! - `inbound/` - HTTP adapter (Axum server) and the outcome-to-response translation
//! - `openapi/` - Published API contract
//!
//! Services are generic over `R: AccountRepository`, allowing
//! different repository implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::{AccountService, DepositFromAtmService};
