//! DIN envelope to use case request mapping.

use serde_json::Value;

use cuentaflex_types::{
    AccountId, DinHeader, DinRequest, TransactionRequest, UnidirectionalTransactionDto,
};

/// A JSON payload that is not a valid deposit envelope.
#[derive(Debug, thiserror::Error)]
#[error("invalid deposit envelope: {reason}")]
pub struct EnvelopeError {
    /// The caller's header, when that part of the payload was well formed
    pub header: Option<DinHeader>,
    pub reason: String,
}

/// Decodes a deposit envelope from already-parsed JSON.
///
/// The header is decoded on its own first so it can still be echoed when
/// only the body is malformed.
pub fn decode_envelope(
    payload: Value,
) -> Result<DinRequest<UnidirectionalTransactionDto>, EnvelopeError> {
    let header = payload
        .get("dinHeader")
        .cloned()
        .and_then(|raw| serde_json::from_value::<DinHeader>(raw).ok());

    serde_json::from_value(payload).map_err(|err| EnvelopeError {
        header,
        reason: err.to_string(),
    })
}

/// Builds the use case request from a decoded envelope.
///
/// The account id is copied verbatim so that anything echoed back to the
/// caller matches what the caller sent.
pub fn to_transaction_request(
    envelope: &DinRequest<UnidirectionalTransactionDto>,
) -> TransactionRequest {
    TransactionRequest::new(
        AccountId::new(envelope.din_body.account_id.clone()),
        envelope.din_body.amount,
    )
}
