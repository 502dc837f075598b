//! Integration tests for the ATM deposit endpoint.
//!
//! These drive the full router, checking status codes, DIN envelopes and
//! header echoing for every kind of use case outcome.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use cuentaflex_hex::{
    AccountService, DepositFromAtmService,
    inbound::{ATM_DEPOSIT_PATH, DetailEnricher, ErrorStatusMap, HttpServer, ResponseTranslator},
};
use cuentaflex_repo::InMemoryAccountRepo;
use cuentaflex_types::{
    Account, AccountId, DepositFromAtmUseCase, DomainError, FeesValues, Outcome, TransactionDone,
    TransactionRequest,
};

/// Use case that always answers with the same outcome.
struct StubUseCase {
    outcome: Outcome<TransactionDone>,
}

#[async_trait]
impl DepositFromAtmUseCase for StubUseCase {
    async fn execute(&self, _request: &TransactionRequest) -> Outcome<TransactionDone> {
        self.outcome.clone()
    }
}

fn translator(fees: FeesValues) -> ResponseTranslator {
    ResponseTranslator::new(
        ErrorStatusMap::for_deposits(),
        DetailEnricher::new(Arc::new(fees)),
    )
}

fn fees() -> FeesValues {
    FeesValues::new().with_deposit_from_atm(Decimal::new(250, 2))
}

fn stub_app(outcome: Outcome<TransactionDone>, fees: FeesValues) -> axum::Router {
    HttpServer::new(
        AccountService::new(InMemoryAccountRepo::new()),
        Arc::new(StubUseCase { outcome }),
        translator(fees),
    )
    .router()
}

fn live_app(repo: InMemoryAccountRepo) -> axum::Router {
    HttpServer::new(
        AccountService::new(repo.clone()),
        Arc::new(DepositFromAtmService::new(repo, Decimal::new(250, 2))),
        translator(fees()),
    )
    .router()
}

fn din_header() -> Value {
    json!({
        "device": "ATM-0042",
        "language": "es",
        "uuid": "7d1c3a52-0f9e-4c11-9a57-1b1c1d1e1f10",
        "ip": "10.0.0.12",
        "transactionTime": "2024-05-01T10:15:30Z"
    })
}

fn deposit_request(account_id: &str, amount: Value) -> Request<Body> {
    let body = json!({
        "dinHeader": din_header(),
        "dinBody": { "accountId": account_id, "amount": amount }
    });
    Request::builder()
        .method(Method::POST)
        .uri(ATM_DEPOSIT_PATH)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn done(new_balance: i64) -> TransactionDone {
    TransactionDone::deposit(
        AccountId::from("A1"),
        Decimal::new(100, 0),
        Decimal::new(250, 2),
        Decimal::new(new_balance, 0),
    )
}

#[tokio::test]
async fn test_success_returns_ok_with_body() {
    let app = stub_app(Outcome::success(done(600)), fees());

    let (status, json) = send(app, deposit_request("A1", json!(100))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dinHeader"], din_header());
    assert_eq!(json["dinBody"]["newBalance"], "600");
    assert_eq!(json["dinBody"]["accountId"], "A1");
    assert!(json.get("dinError").is_none());
}

#[tokio::test]
async fn test_invalid_amount_returns_bad_request_with_fee() {
    let app = stub_app(
        Outcome::failure(DomainError::invalid_amount("Amount must be positive")),
        fees(),
    );

    let (status, json) = send(app, deposit_request("A1", json!(-5))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["dinHeader"], din_header());
    assert_eq!(json["dinError"]["code"], "INVALID_AMOUNT");
    assert_eq!(json["dinError"]["details"], json!(["2.50"]));
    assert!(json.get("dinBody").is_none());
}

#[tokio::test]
async fn test_account_not_found_echoes_account_id() {
    let app = stub_app(Outcome::failure(DomainError::account_not_found()), fees());

    let (status, json) = send(app, deposit_request("ZZZ", json!(50))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["dinHeader"], din_header());
    assert_eq!(json["dinError"]["code"], "ACCOUNT_NOT_FOUND");
    assert_eq!(json["dinError"]["details"], json!(["ZZZ"]));
}

#[tokio::test]
async fn test_unregistered_error_returns_internal_error() {
    let app = stub_app(
        Outcome::failure(DomainError::new("UNEXPECTED_DB_ERROR", "connection reset")),
        fees(),
    );

    let (status, json) = send(app, deposit_request("A1", json!(10))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["dinHeader"], din_header());
    assert_eq!(json["dinError"]["code"], "UNEXPECTED_DB_ERROR");
    assert_eq!(json["dinError"]["details"], json!([]));
}

#[tokio::test]
async fn test_unknown_code_passes_through_as_internal_error() {
    let app = stub_app(
        Outcome::failure(DomainError::new("VELOCITY_CHECK", "too many deposits")),
        fees(),
    );

    let (status, json) = send(app, deposit_request("A1", json!(10))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["dinHeader"], din_header());
    assert_eq!(json["dinError"]["code"], "VELOCITY_CHECK");
    assert_eq!(json["dinError"]["message"], "too many deposits");
    assert_eq!(json["dinError"]["details"], json!([]));
}

#[tokio::test]
async fn test_missing_fee_still_reports_invalid_amount() {
    let app = stub_app(
        Outcome::failure(DomainError::invalid_amount("Amount must be positive")),
        FeesValues::default(),
    );

    let (status, json) = send(app, deposit_request("A1", json!(-5))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["dinHeader"], din_header());
    assert_eq!(json["dinError"]["code"], "INVALID_AMOUNT");
    assert_eq!(json["dinError"]["details"], json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = stub_app(Outcome::success(done(600)), fees());
    let request = Request::builder()
        .method(Method::POST)
        .uri(ATM_DEPOSIT_PATH)
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"dinBody": "#))
        .unwrap();

    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);
}

#[tokio::test]
async fn test_undecodable_body_echoes_header() {
    let app = stub_app(Outcome::success(done(600)), fees());

    let (status, json) = send(app, deposit_request("A1", json!("abc"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["dinHeader"], din_header());
    assert_eq!(json["dinError"]["code"], "INVALID_REQUEST");
    assert_eq!(json["dinError"]["details"], json!([]));
    assert!(json.get("dinBody").is_none());
}

#[tokio::test]
async fn test_live_deposit_credits_account() {
    let repo = InMemoryAccountRepo::with_accounts([Account::new(
        AccountId::from("A1"),
        Decimal::new(500, 0),
    )]);
    let app = live_app(repo);

    let (status, json) = send(app.clone(), deposit_request("A1", json!("100"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dinBody"]["newBalance"], "597.50");
    assert_eq!(json["dinBody"]["fee"], "2.50");

    let request = Request::builder()
        .uri("/api/accounts/A1")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["balance"], "597.50");
}

#[tokio::test]
async fn test_live_deposit_below_fee() {
    let repo = InMemoryAccountRepo::with_accounts([Account::new(
        AccountId::from("A1"),
        Decimal::new(500, 0),
    )]);

    let (status, json) = send(live_app(repo), deposit_request("A1", json!("1.00"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["dinError"]["details"], json!(["2.50"]));
}

#[tokio::test]
async fn test_live_deposit_overflowing_balance_is_rejected() {
    let repo = InMemoryAccountRepo::with_accounts([Account::new(
        AccountId::from("A1"),
        Decimal::MAX,
    )]);
    let app = live_app(repo);

    let (status, json) = send(app.clone(), deposit_request("A1", json!("100"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["dinHeader"], din_header());
    assert_eq!(json["dinError"]["code"], "INVALID_AMOUNT");
    assert_eq!(json["dinError"]["details"], json!(["2.50"]));

    let request = Request::builder()
        .uri("/api/accounts/A1")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["balance"], Decimal::MAX.to_string());
}

#[tokio::test]
async fn test_live_deposit_unknown_account() {
    let (status, json) = send(
        live_app(InMemoryAccountRepo::new()),
        deposit_request("ZZZ", json!(50)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["dinHeader"], din_header());
    assert_eq!(json["dinError"]["details"], json!(["ZZZ"]));
}

#[tokio::test]
async fn test_create_account_conflict() {
    let app = live_app(InMemoryAccountRepo::new());
    let create = || {
        Request::builder()
            .method(Method::POST)
            .uri("/api/accounts")
            .header("Content-Type", "application/json")
            .body(Body::from(r#"{"accountId": "A1", "initialBalance": "500"}"#))
            .unwrap()
    };

    let (status, json) = send(app.clone(), create()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["accountId"], "A1");

    let (status, json) = send(app, create()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], 409);
}

#[tokio::test]
async fn test_health() {
    let app = stub_app(Outcome::success(done(0)), fees());
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}
