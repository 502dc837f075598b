//! Account domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller-facing account identifier.
///
/// Kept as opaque text: the service never interprets its structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(example = "A1")]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An account that can receive deposits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,
    /// Current balance
    pub balance: Decimal,
    /// When the account was opened
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Opens an account with the given starting balance.
    pub fn new(id: AccountId, balance: Decimal) -> Self {
        Self {
            id,
            balance,
            created_at: Utc::now(),
        }
    }

    /// Adds `amount` to the balance and returns the new balance.
    ///
    /// Returns `None`, leaving the balance untouched, when the sum does not
    /// fit in a `Decimal`.
    pub fn credit(&mut self, amount: Decimal) -> Option<Decimal> {
        self.balance = self.balance.checked_add(amount)?;
        Some(self.balance)
    }
}
