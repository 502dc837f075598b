//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use cuentaflex_types::{AccountRepository, DepositFromAtmUseCase};

use super::handlers::{self, AppState};
use super::translator::ResponseTranslator;
use crate::AccountService;
use crate::openapi::ApiDoc;

/// Route of the ATM deposit endpoint.
pub const ATM_DEPOSIT_PATH: &str = "/api/v1/accounts/deposit/atm";

/// HTTP Server for the Cuentaflex API.
pub struct HttpServer<R: AccountRepository> {
    state: Arc<AppState<R>>,
}

impl<R: AccountRepository> HttpServer<R> {
    /// Creates a new HTTP server from its collaborators.
    pub fn new(
        accounts: AccountService<R>,
        deposit_from_atm: Arc<dyn DepositFromAtmUseCase>,
        translator: ResponseTranslator,
    ) -> Self {
        Self {
            state: Arc::new(AppState {
                accounts,
                deposit_from_atm,
                translator,
            }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/api-docs/openapi.json",
                get(|| async { Json(ApiDoc::openapi()) }),
            )
            .route(
                "/api/accounts",
                post(handlers::create_account::<R>).get(handlers::list_accounts::<R>),
            )
            .route("/api/accounts/{id}", get(handlers::get_account::<R>))
            .route(ATM_DEPOSIT_PATH, post(handlers::deposit_from_atm::<R>))
            .layer(metrics)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
