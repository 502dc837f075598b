//! Supplementary detail strings attached to error responses.

use std::sync::Arc;

use cuentaflex_types::{DomainError, ErrorCode, FeeError, FeeSchedule, Outcome, TransactionRequest};

/// Failure while computing detail strings.
#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("fee lookup failed: {0}")]
    Fee(#[from] FeeError),
}

/// Computes the `details` of an error payload from data only this layer has:
/// the fee configuration and the original request.
#[derive(Clone)]
pub struct DetailEnricher {
    fees: Arc<dyn FeeSchedule>,
}

impl DetailEnricher {
    pub fn new(fees: Arc<dyn FeeSchedule>) -> Self {
        Self { fees }
    }

    /// Details for any outcome. Successes never carry details.
    pub fn details<T>(
        &self,
        outcome: &Outcome<T>,
        request: &TransactionRequest,
    ) -> Result<Vec<String>, EnrichmentError> {
        match outcome {
            Outcome::Success(_) => Ok(Vec::new()),
            Outcome::Failure(error) => self.details_for_error(error, request),
        }
    }

    /// Details for a domain failure.
    ///
    /// The account id comes from the request because the use case does not
    /// echo it back in the error.
    pub fn details_for_error(
        &self,
        error: &DomainError,
        request: &TransactionRequest,
    ) -> Result<Vec<String>, EnrichmentError> {
        match &error.code {
            ErrorCode::InvalidAmount => Ok(vec![self.fees.deposit_from_atm_fee()?.to_string()]),
            ErrorCode::AccountNotFound => Ok(vec![request.account_id().to_string()]),
            ErrorCode::UnexpectedDbError | ErrorCode::Unrecognized(_) => Ok(Vec::new()),
        }
    }
}
