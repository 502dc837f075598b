//! Transaction domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::account::AccountId;

/// Unique identifier for a Transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random TransactionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TransactionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Input of a single-account transaction such as an ATM deposit.
///
/// Fields are private so the request cannot change once the inbound
/// mapper has built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    account_id: AccountId,
    amount: Decimal,
}

impl TransactionRequest {
    pub fn new(account_id: AccountId, amount: Decimal) -> Self {
        Self { account_id, amount }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Result of a completed transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDone {
    pub transaction_id: TransactionId,
    pub account_id: AccountId,
    /// Gross amount requested by the caller
    pub amount: Decimal,
    /// Fee withheld from the amount
    pub fee: Decimal,
    /// Balance after the net amount was applied
    pub new_balance: Decimal,
    pub processed_at: DateTime<Utc>,
}

impl TransactionDone {
    /// Records a completed deposit.
    pub fn deposit(
        account_id: AccountId,
        amount: Decimal,
        fee: Decimal,
        new_balance: Decimal,
    ) -> Self {
        Self {
            transaction_id: TransactionId::new(),
            account_id,
            amount,
            fee,
            new_balance,
            processed_at: Utc::now(),
        }
    }
}
