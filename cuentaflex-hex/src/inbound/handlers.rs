//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use cuentaflex_types::{
    AccountId, AccountRepository, AccountResponse, AppError, CreateAccountRequest,
    DepositFromAtmUseCase, TransactionDoneDto,
};

use super::mapper;
use super::translator::{ResponseTranslator, TranslatedResponse};
use crate::AccountService;

/// Application state shared across handlers.
pub struct AppState<R: AccountRepository> {
    pub accounts: AccountService<R>,
    pub deposit_from_atm: Arc<dyn DepositFromAtmUseCase>,
    pub translator: ResponseTranslator,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Open a new account.
#[tracing::instrument(skip(state))]
pub async fn create_account<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.accounts.create_account(req).await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}

/// List all accounts.
#[tracing::instrument(skip(state))]
pub async fn list_accounts<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    let accounts = state.accounts.list_accounts().await?;
    let response: Vec<AccountResponse> = accounts.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

/// Get account by ID.
#[tracing::instrument(skip(state), fields(account_id = %id))]
pub async fn get_account<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.accounts.get_account(&AccountId::new(id)).await?;
    Ok(Json(AccountResponse::from(account)))
}

/// Deposit cash received at an ATM.
///
/// Every request with a readable `dinHeader` gets a DIN envelope echoing
/// it, whatever the outcome. Payloads that are not JSON, or whose header is
/// unreadable, have nothing to echo and get the generic error body instead.
#[tracing::instrument(skip_all)]
pub async fn deposit_from_atm<R: AccountRepository>(
    State(state): State<Arc<AppState<R>>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<TranslatedResponse<TransactionDoneDto>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected ATM deposit payload");
        AppError::BadRequest(rejection.body_text())
    })?;

    let envelope = match mapper::decode_envelope(payload) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::debug!(error = %err, "undecodable ATM deposit envelope");
            return match err.header {
                Some(header) => Ok(TranslatedResponse::invalid_request(header, err.reason)),
                None => Err(AppError::BadRequest(err.reason).into()),
            };
        }
    };

    let request = mapper::to_transaction_request(&envelope);
    tracing::info!(
        account_id = %request.account_id(),
        amount = %request.amount(),
        din_uuid = envelope.din_header.uuid.as_deref().unwrap_or("-"),
        "ATM deposit received"
    );

    let outcome = state
        .deposit_from_atm
        .execute(&request)
        .await
        .map(TransactionDoneDto::from);

    Ok(state
        .translator
        .translate(envelope.din_header, outcome, &request))
}
