//! Domain error code to transport status mapping.

use std::collections::HashMap;

use axum::http::StatusCode;

use cuentaflex_types::ErrorCode;

/// Coarse transport-level classification of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Ok,
    BadRequest,
    NotFound,
    Internal,
}

impl StatusCategory {
    pub fn status_code(self) -> StatusCode {
        match self {
            StatusCategory::Ok => StatusCode::OK,
            StatusCategory::BadRequest => StatusCode::BAD_REQUEST,
            StatusCategory::NotFound => StatusCode::NOT_FOUND,
            StatusCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Read-only table of the error codes that get a specific status.
///
/// Codes missing from the table resolve to [`StatusCategory::Internal`], so
/// a new code introduced by a use case degrades to a generic failure until
/// it is registered here.
#[derive(Debug, Clone)]
pub struct ErrorStatusMap {
    entries: HashMap<ErrorCode, StatusCategory>,
}

impl ErrorStatusMap {
    /// Builds a table from explicit entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (ErrorCode, StatusCategory)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The table used by the deposit endpoints.
    pub fn for_deposits() -> Self {
        Self::from_entries([
            (ErrorCode::AccountNotFound, StatusCategory::NotFound),
            (ErrorCode::InvalidAmount, StatusCategory::BadRequest),
        ])
    }

    pub fn status_for(&self, code: &ErrorCode) -> StatusCategory {
        self.entries
            .get(code)
            .copied()
            .unwrap_or(StatusCategory::Internal)
    }

    pub fn is_registered(&self, code: &ErrorCode) -> bool {
        self.entries.contains_key(code)
    }
}

impl Default for ErrorStatusMap {
    fn default() -> Self {
        Self::for_deposits()
    }
}
