//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Transaction endpoints speak the DIN envelope format: every request and
//! response carries a `dinHeader` used to correlate the two.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Account, AccountId, TransactionDone, TransactionId};

// ─────────────────────────────────────────────────────────────────────────────
// DIN envelope
// ─────────────────────────────────────────────────────────────────────────────

/// Correlation header supplied by the caller and echoed in every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DinHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "ATM-0042")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "es")]
    pub language: Option<String>,
    /// Caller-generated request identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "c0a80101-7f00-4a5b-9c1d-2b3c4d5e6f70")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "10.0.0.12")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "2024-05-01T10:15:30Z")]
    pub transaction_time: Option<String>,
}

/// Inbound DIN envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DinRequest<T> {
    pub din_header: DinHeader,
    pub din_body: T,
}

/// Error payload of a DIN response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DinError {
    /// Stable machine-readable code
    #[schema(example = "INVALID_AMOUNT")]
    pub code: String,
    /// Human-readable description
    pub message: String,
    /// Supplementary values the caller can use to correct the request
    #[serde(default)]
    #[schema(example = json!(["2.50"]))]
    pub details: Vec<String>,
}

/// Outbound DIN envelope: the echoed header plus either a body or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct DinResponse<T> {
    din_header: DinHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    din_body: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    din_error: Option<DinError>,
}

impl<T> DinResponse<T> {
    pub fn success(header: DinHeader, body: T) -> Self {
        Self {
            din_header: header,
            din_body: Some(body),
            din_error: None,
        }
    }

    pub fn failure(header: DinHeader, error: DinError) -> Self {
        Self {
            din_header: header,
            din_body: None,
            din_error: Some(error),
        }
    }

    pub fn header(&self) -> &DinHeader {
        &self.din_header
    }

    pub fn body(&self) -> Option<&T> {
        self.din_body.as_ref()
    }

    pub fn error(&self) -> Option<&DinError> {
        self.din_error.as_ref()
    }

    /// Splits the envelope into its payload. An envelope decoded from a
    /// peer that carries neither part is reported as an error without details.
    pub fn into_result(self) -> Result<T, DinError> {
        match (self.din_body, self.din_error) {
            (_, Some(error)) => Err(error),
            (Some(body), None) => Ok(body),
            (None, None) => Err(DinError {
                code: "EMPTY_RESPONSE".into(),
                message: "Response carried neither a body nor an error".into(),
                details: Vec::new(),
            }),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transaction DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Body of a transaction that touches a single account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnidirectionalTransactionDto {
    /// Target account ID
    #[schema(example = "A1")]
    pub account_id: String,
    /// Amount in currency units; accepts a JSON number or a decimal string
    #[schema(value_type = String, example = "100.00")]
    pub amount: Decimal,
}

/// Body returned after a successful transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDoneDto {
    pub transaction_id: TransactionId,
    pub account_id: AccountId,
    #[schema(value_type = String, example = "100")]
    pub amount: Decimal,
    #[schema(value_type = String, example = "2.00")]
    pub fee: Decimal,
    #[schema(value_type = String, example = "598.00")]
    pub new_balance: Decimal,
    pub processed_at: DateTime<Utc>,
}

impl From<TransactionDone> for TransactionDoneDto {
    fn from(done: TransactionDone) -> Self {
        Self {
            transaction_id: done.transaction_id,
            account_id: done.account_id,
            amount: done.amount,
            fee: done.fee,
            new_balance: done.new_balance,
            processed_at: done.processed_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Account DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to open a new account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Identifier chosen by the caller
    #[schema(example = "A1")]
    pub account_id: String,
    /// Opening balance, defaults to zero
    #[serde(default)]
    #[schema(value_type = String, example = "500")]
    pub initial_balance: Decimal,
}

/// Account as exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub account_id: AccountId,
    #[schema(value_type = String, example = "500")]
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.id,
            balance: account.balance,
            created_at: account.created_at,
        }
    }
}
