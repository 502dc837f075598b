//! Error types for the deposit service.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AccountId;

/// Stable code identifying a domain failure.
///
/// The set is shared between the use cases that produce failures and the
/// adapters that render them. Codes this build does not know about are kept
/// verbatim in [`ErrorCode::Unrecognized`] so they can still be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    AccountNotFound,
    InvalidAmount,
    UnexpectedDbError,
    Unrecognized(UnrecognizedCode),
}

/// Code text outside the known set.
///
/// Only built by parsing, so it never holds the text of a known code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnrecognizedCode(String);

impl UnrecognizedCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ErrorCode {
    /// Returns the wire representation of the code.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::AccountNotFound => "ACCOUNT_NOT_FOUND",
            ErrorCode::InvalidAmount => "INVALID_AMOUNT",
            ErrorCode::UnexpectedDbError => "UNEXPECTED_DB_ERROR",
            ErrorCode::Unrecognized(code) => code.as_str(),
        }
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "ACCOUNT_NOT_FOUND" => ErrorCode::AccountNotFound,
            "INVALID_AMOUNT" => ErrorCode::InvalidAmount,
            "UNEXPECTED_DB_ERROR" => ErrorCode::UnexpectedDbError,
            other => ErrorCode::Unrecognized(UnrecognizedCode(other.to_string())),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        ErrorCode::from(code.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Unrecognized(UnrecognizedCode(code)) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain-level failure reported by a use case.
///
/// `code` drives every decision downstream; `message` is for humans only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn account_not_found() -> Self {
        Self::new(ErrorCode::AccountNotFound, "Account not found")
    }

    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAmount, message)
    }

    pub fn unexpected_db_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnexpectedDbError, message)
    }
}

/// Fee configuration lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeeError {
    #[error("Fee not configured: {0}")]
    NotConfigured(&'static str),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Balance of account {0} would overflow")]
    BalanceOverflow(AccountId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::AccountNotFound(id) => AppError::NotFound(format!("Account {}", id)),
            RepoError::Conflict(msg) => AppError::Conflict(msg),
            overflow @ RepoError::BalanceOverflow(_) => AppError::BadRequest(overflow.to_string()),
            RepoError::Storage(msg) => AppError::Internal(msg),
        }
    }
}
