//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use cuentaflex_types::domain::{AccountId, TransactionId};
use cuentaflex_types::dto::{
    AccountResponse, CreateAccountRequest, DinError, DinHeader, DinRequest, DinResponse,
    TransactionDoneDto, UnidirectionalTransactionDto,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Open a new account
#[utoipa::path(
    post,
    path = "/api/accounts",
    tag = "accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account opened", body = AccountResponse),
        (status = 400, description = "Blank id or negative balance"),
        (status = 409, description = "Account id already in use")
    )
)]
async fn create_account() {}

/// List all accounts
#[utoipa::path(
    get,
    path = "/api/accounts",
    tag = "accounts",
    responses(
        (status = 200, description = "List of accounts", body = Vec<AccountResponse>)
    )
)]
async fn list_accounts() {}

/// Get account by ID
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    tag = "accounts",
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account details", body = AccountResponse),
        (status = 404, description = "Account not found")
    )
)]
async fn get_account() {}

/// Deposit cash received at an ATM
///
/// The ATM fee is withheld from the amount. Error responses carry `details`:
/// the current fee for `INVALID_AMOUNT`, the requested account id for
/// `ACCOUNT_NOT_FOUND`.
#[utoipa::path(
    post,
    path = "/api/v1/accounts/deposit/atm",
    tag = "transactions",
    request_body = DinRequest<UnidirectionalTransactionDto>,
    responses(
        (status = 200, description = "Deposit applied", body = DinResponse<TransactionDoneDto>),
        (status = 400, description = "INVALID_AMOUNT, details hold the ATM fee; INVALID_REQUEST when the body cannot be decoded", body = DinResponse<TransactionDoneDto>),
        (status = 404, description = "ACCOUNT_NOT_FOUND, details hold the account id", body = DinResponse<TransactionDoneDto>),
        (status = 500, description = "Any other failure", body = DinResponse<TransactionDoneDto>)
    )
)]
async fn deposit_from_atm() {}

/// OpenAPI documentation for the Cuentaflex API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cuentaflex Deposit Service API",
        version = "1.0.0",
        description = "Account management and ATM deposits.\n\nTransaction endpoints use the DIN envelope: the `dinHeader` sent by the caller is echoed unchanged in every response.",
        license(name = "MIT"),
    ),
    paths(
        health,
        create_account,
        list_accounts,
        get_account,
        deposit_from_atm,
    ),
    components(
        schemas(
            CreateAccountRequest,
            AccountResponse,
            AccountId,
            TransactionId,
            DinHeader,
            DinError,
            UnidirectionalTransactionDto,
            TransactionDoneDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "accounts", description = "Account management operations"),
        (name = "transactions", description = "Deposit operations"),
    )
)]
pub struct ApiDoc;
