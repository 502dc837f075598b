//! Client example walking through the ATM deposit outcomes against a local server.
//!
//! Run with: cargo run -p cuentaflex-app --example atm_deposit

use std::net::SocketAddr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::net::TcpListener;

use cuentaflex_client::CuentaflexClient;
use cuentaflex_hex::{
    AccountService, DepositFromAtmService,
    inbound::{DetailEnricher, ErrorStatusMap, HttpServer, ResponseTranslator},
};
use cuentaflex_repo::InMemoryAccountRepo;
use cuentaflex_types::FeesValues;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    let fee = Decimal::new(250, 2);
    let repo = InMemoryAccountRepo::new();
    let server = HttpServer::new(
        AccountService::new(repo.clone()),
        Arc::new(DepositFromAtmService::new(repo, fee)),
        ResponseTranslator::new(
            ErrorStatusMap::for_deposits(),
            DetailEnricher::new(Arc::new(FeesValues::new().with_deposit_from_atm(fee))),
        ),
    );
    let router = server.router();

    println!("🚀 Starting server on {addr}...");
    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {err}");
        }
    });

    let client = CuentaflexClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: ATM deposit outcomes
    // ─────────────────────────────────────────────────────────────────────────

    let account = client.create_account("A1", Decimal::new(500, 0)).await?;
    println!("📂 Opened {} with balance {}", account.account_id, account.balance);

    let cases = [
        ("A1", Decimal::new(100, 0), "valid deposit"),
        ("A1", Decimal::new(-5, 0), "negative amount"),
        ("A1", Decimal::new(2, 0), "amount below the fee"),
        ("ZZZ", Decimal::new(50, 0), "unknown account"),
    ];

    for (account_id, amount, label) in cases {
        let header = CuentaflexClient::new_header("example-atm");
        let reply = client.deposit_from_atm(header, account_id, amount).await?;
        println!("\n💳 {label}: HTTP {}", reply.status);
        match reply.envelope.into_result() {
            Ok(done) => println!("   ✓ new balance {}", done.new_balance),
            Err(error) => println!("   ✗ {} {:?}", error.code, error.details),
        }
    }

    let account = client.get_account("A1").await?;
    println!("\n📂 Final balance of {}: {}", account.account_id, account.balance);

    Ok(())
}
