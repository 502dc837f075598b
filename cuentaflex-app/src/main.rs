//! # Cuentaflex Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the repository adapter
//! - Create the account service and the ATM deposit use case
//! - Build the response translator (error registry + detail enricher)
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use opentelemetry::global;
use opentelemetry_sdk::{
    metrics::SdkMeterProvider, propagation::TraceContextPropagator, trace as sdktrace,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cuentaflex_hex::{
    AccountService, DepositFromAtmService,
    inbound::{DetailEnricher, ErrorStatusMap, HttpServer, ResponseTranslator},
};
use cuentaflex_repo::InMemoryAccountRepo;
use cuentaflex_types::{FeeSchedule, FeesValues};

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("cuentaflex-service"), provider))
}

/// Exports the HTTP metrics recorded by the router over OTLP.
fn init_meter() -> anyhow::Result<SdkMeterProvider> {
    let exporter = opentelemetry_otlp::MetricExporter::builder()
        .with_tonic()
        .build()?;

    let provider = SdkMeterProvider::builder()
        .with_periodic_exporter(exporter)
        .build();

    global::set_meter_provider(provider.clone());
    Ok(provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Export spans and metrics only when a collector is configured
    let (otel, meter) = if std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_some() {
        (Some(init_tracer()?), Some(init_meter()?))
    } else {
        (None, None)
    };
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cuentaflex_app=debug,cuentaflex_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting cuentaflex server on port {}", config.port);
    tracing::info!(
        fee = %config.deposit_from_atm_fee,
        seeded_accounts = config.seed_accounts.len(),
        "ATM deposit configuration loaded"
    );

    let repo = InMemoryAccountRepo::with_accounts(config.seed_accounts);
    let fees = FeesValues::new().with_deposit_from_atm(config.deposit_from_atm_fee);

    let deposit_from_atm = Arc::new(DepositFromAtmService::new(
        repo.clone(),
        fees.deposit_from_atm_fee()?,
    ));

    let translator = ResponseTranslator::new(
        ErrorStatusMap::for_deposits(),
        DetailEnricher::new(Arc::new(fees)),
    );

    // Create and run the HTTP server
    let server = HttpServer::new(AccountService::new(repo), deposit_from_atm, translator);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces and metrics are flushed before exit
    if let Some((_, provider)) = otel {
        if let Err(err) = provider.shutdown() {
            tracing::warn!(error = %err, "failed to flush traces");
        }
    }
    if let Some(provider) = meter {
        if let Err(err) = provider.shutdown() {
            tracing::warn!(error = %err, "failed to flush metrics");
        }
    }
    Ok(())
}
