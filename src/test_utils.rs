use std::sync::Arc;

use axum::Router;
use compute::Distributor;
use model::ForecastDocument;
use moka::future::Cache;
use tokio::sync::RwLock;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::data_source::{DocumentOrigin, DocumentSources, LoadedDocument};
use crate::router::create_router;
use crate::schemas::AppState;

/// Sales week document shipped with the mock data.
pub const SAMPLE_DOCUMENT: &str = include_str!("../assets/mock-data/events-api-response.json");

pub fn sample_document() -> ForecastDocument {
    serde_json::from_str(SAMPLE_DOCUMENT).expect("Sample document should parse")
}

/// Create AppState serving the sample document, reloading from `sources`
pub fn setup_test_app_state_with_sources(sources: DocumentSources) -> AppState {
    AppState {
        document: Arc::new(RwLock::new(LoadedDocument::new(
            sample_document(),
            DocumentOrigin::Primary,
        ))),
        sources,
        distributor: Distributor::default(),
        cache: Cache::new(100),
    }
}

/// Create AppState serving the sample document
pub fn setup_test_app_state() -> AppState {
    setup_test_app_state_with_sources(DocumentSources::new(
        "does-not-exist/primary.json",
        "does-not-exist/fallback.json",
    ))
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is read from RUST_LOG and defaults to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app for testing
pub fn setup_test_app() -> Router {
    create_router(setup_test_app_state())
}
