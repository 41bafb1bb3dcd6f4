use std::sync::Arc;

use axum::{http::StatusCode, response::Json};
use common::{AllocationDto, CycleSummary, DistributionReport, ForecastDayDto, ForecastReport};
use compute::Distributor;
use model::{EventCounts, EventProjection, Priority};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::{OpenApi, ToSchema};

use crate::data_source::{DocumentOrigin, DocumentSources, LoadedDocument};

pub use common::ApiResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Forecast document currently served
    pub document: Arc<RwLock<LoadedDocument>>,
    /// Where the document is reloaded from
    pub sources: DocumentSources,
    /// Distributor configured for this instance
    pub distributor: Distributor,
    /// Cache for computed forecasts
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Forecast(ForecastReport),
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Builds an error response tuple for a handler.
pub fn error_response(
    status: StatusCode,
    code: &str,
    error: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Origin of the served document (primary, fallback or default)
    pub data_source: String,
}

/// Reload response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReloadResponse {
    pub origin: DocumentOrigin,
    /// Generation of the document now served
    pub generation: u64,
    pub days: usize,
    pub cycles: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::cycles::get_cycles,
        crate::handlers::cycles::get_base_projection,
        crate::handlers::forecast::get_forecast,
        crate::handlers::forecast::create_forecast,
        crate::handlers::distribution::create_distribution,
        crate::handlers::reload::reload_document,
    ),
    components(
        schemas(
            ApiResponse<ForecastReport>,
            ApiResponse<DistributionReport>,
            ApiResponse<Vec<CycleSummary>>,
            ApiResponse<Vec<EventProjection>>,
            ApiResponse<ReloadResponse>,
            ErrorResponse,
            HealthResponse,
            ReloadResponse,
            DocumentOrigin,
            ForecastReport,
            ForecastDayDto,
            AllocationDto,
            DistributionReport,
            CycleSummary,
            EventProjection,
            EventCounts,
            Priority,
            crate::handlers::forecast::ForecastRequest,
            crate::handlers::distribution::DistributionRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "cycles", description = "Cycle and baseline endpoints"),
        (name = "forecast", description = "Event forecast endpoints"),
        (name = "distribution", description = "Entity distribution endpoints"),
        (name = "admin", description = "Document management endpoints"),
    ),
    info(
        title = "Eventcast API",
        description = "Event forecast API - distributes entities over prioritized cycles and projects the resulting daily events",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
