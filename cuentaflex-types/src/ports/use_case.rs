//! Use case ports driven by the inbound adapters.

use crate::domain::{TransactionDone, TransactionRequest};
use crate::outcome::Outcome;

/// Deposits cash received at an ATM into an account.
///
/// Business failures are returned as [`Outcome::Failure`], never as panics
/// or transport errors.
#[async_trait::async_trait]
pub trait DepositFromAtmUseCase: Send + Sync {
    async fn execute(&self, request: &TransactionRequest) -> Outcome<TransactionDone>;
}
