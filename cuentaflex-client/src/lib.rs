//! # Cuentaflex Client SDK
//!
//! A typed Rust client for the Cuentaflex API.

use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use cuentaflex_types::{
    AccountResponse, CreateAccountRequest, DinHeader, DinRequest, DinResponse,
    TransactionDoneDto, UnidirectionalTransactionDto,
};

/// Path of the ATM deposit endpoint.
const ATM_DEPOSIT_PATH: &str = "/api/v1/accounts/deposit/atm";

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Response of a DIN endpoint: the HTTP status and the decoded envelope.
#[derive(Debug, Clone)]
pub struct DinReply<T> {
    pub status: u16,
    pub envelope: DinResponse<T>,
}

/// Cuentaflex API client.
pub struct CuentaflexClient {
    base_url: String,
    http: Client,
}

impl CuentaflexClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Builds a DIN header for a new request, with a fresh request uuid.
    pub fn new_header(device: impl Into<String>) -> DinHeader {
        DinHeader {
            device: Some(device.into()),
            uuid: Some(uuid::Uuid::new_v4().to_string()),
            ..Default::default()
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Opens a new account.
    pub async fn create_account(
        &self,
        account_id: &str,
        initial_balance: Decimal,
    ) -> Result<AccountResponse, ClientError> {
        let req = CreateAccountRequest {
            account_id: account_id.to_string(),
            initial_balance,
        };
        self.post("/api/accounts", &req).await
    }

    /// Gets an account by ID.
    pub async fn get_account(&self, id: &str) -> Result<AccountResponse, ClientError> {
        self.get(&format!("/api/accounts/{}", id)).await
    }

    /// Lists all accounts.
    pub async fn list_accounts(&self) -> Result<Vec<AccountResponse>, ClientError> {
        self.get("/api/accounts").await
    }

    /// Deposits cash at an ATM.
    ///
    /// Domain failures are not client errors: they come back as an envelope
    /// whose `error()` is set, together with the HTTP status.
    pub async fn deposit_from_atm(
        &self,
        header: DinHeader,
        account_id: &str,
        amount: Decimal,
    ) -> Result<DinReply<TransactionDoneDto>, ClientError> {
        let req = DinRequest {
            din_header: header,
            din_body: UnidirectionalTransactionDto {
                account_id: account_id.to_string(),
                amount,
            },
        };
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, ATM_DEPOSIT_PATH))
            .json(&req)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        match serde_json::from_str(&body) {
            Ok(envelope) => Ok(DinReply { status, envelope }),
            Err(_) => Err(ClientError::Api {
                status,
                message: error_message(body),
            }),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(body),
            })
        }
    }
}

/// Extracts the `error` field of a generic error body, or returns it whole.
fn error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body)
}
