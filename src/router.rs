use crate::handlers::{
    cycles::{get_base_projection, get_cycles},
    distribution::create_distribution,
    forecast::{create_forecast, get_forecast},
    health::health_check,
    reload::reload_document,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Document views
        .route("/api/v1/cycles", get(get_cycles))
        .route("/api/v1/projection/base", get(get_base_projection))
        // Forecast and distribution
        .route("/api/v1/forecast", get(get_forecast).post(create_forecast))
        .route("/api/v1/distribution", post(create_distribution))
        // Admin
        .route("/api/v1/reload", post(reload_document))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
