//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer, plus the
//! translation of use case outcomes into DIN responses.

pub mod enricher;
pub mod handlers;
pub mod mapper;
pub mod registry;
mod server;
pub mod translator;

pub use enricher::{DetailEnricher, EnrichmentError};
pub use handlers::AppState;
pub use registry::{ErrorStatusMap, StatusCategory};
pub use server::{ATM_DEPOSIT_PATH, HttpServer};
pub use translator::{ResponseTranslator, TranslatedResponse};
