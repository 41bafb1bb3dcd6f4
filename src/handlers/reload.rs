use axum::{extract::State, response::Json};
use tracing::{info, instrument};

use crate::schemas::{ApiResponse, AppState, ReloadResponse};

/// Reload the forecast document from its sources
#[utoipa::path(
    post,
    path = "/api/v1/reload",
    tag = "admin",
    responses(
        (status = 200, description = "Document reloaded", body = ApiResponse<ReloadResponse>)
    )
)]
#[instrument]
pub async fn reload_document(State(state): State<AppState>) -> Json<ApiResponse<ReloadResponse>> {
    let loaded = state.sources.load().await;

    let response = {
        let mut current = state.document.write().await;
        let next = loaded.succeeding(&current);
        let response = ReloadResponse {
            origin: next.origin,
            generation: next.generation,
            days: next.document.events_projection.len(),
            cycles: next.document.cycles.len(),
        };
        *current = next;
        response
    };
    // Entries of older generations can no longer be hit
    state.cache.invalidate_all();
    info!("Reloaded forecast document from {} source", response.origin.as_str());

    Json(ApiResponse::ok(response, "Document reloaded"))
}
