use axum::{extract::State, http::StatusCode, response::Json};
use compute::sorted_by_priority;
use common::CycleSummary;
use model::{EventProjection, ModelError, Priority};
use serde::Deserialize;
use tracing::{debug, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::extractors::ValidQuery;
use crate::helpers::converters::cycle_to_summary;
use crate::schemas::{ApiResponse, AppState, ErrorResponse, error_response};

/// Query parameters for listing cycles
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct CyclesQuery {
    /// Only list cycles of this priority (HIGH, MEDIUM, LOW or NEUTRAL, any case)
    pub priority: Option<String>,
}

/// List cycles ordered by priority
#[utoipa::path(
    get,
    path = "/api/v1/cycles",
    tag = "cycles",
    params(CyclesQuery),
    responses(
        (status = 200, description = "Cycles retrieved successfully", body = ApiResponse<Vec<CycleSummary>>),
        (status = 400, description = "Unknown priority", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_cycles(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<CyclesQuery>,
) -> Result<Json<ApiResponse<Vec<CycleSummary>>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_cycles function");

    let priority = query
        .priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()
        .map_err(|err| match err {
            ModelError::UnknownPriority(_) => {
                error_response(StatusCode::BAD_REQUEST, "UNKNOWN_PRIORITY", err.to_string())
            }
        })?;

    let loaded = state.document.read().await;
    let cycles: Vec<CycleSummary> = sorted_by_priority(&loaded.document.cycles)
        .iter()
        .filter(|cycle| priority.is_none_or(|p| cycle.priority == p))
        .map(cycle_to_summary)
        .collect();
    debug!("Returning {} cycles", cycles.len());

    Ok(Json(ApiResponse::ok(cycles, "Cycles retrieved successfully")))
}

/// Get the baseline projection the forecast is stacked on
#[utoipa::path(
    get,
    path = "/api/v1/projection/base",
    tag = "cycles",
    responses(
        (status = 200, description = "Baseline projection retrieved successfully", body = ApiResponse<Vec<EventProjection>>)
    )
)]
#[instrument]
pub async fn get_base_projection(State(state): State<AppState>) -> Json<ApiResponse<Vec<EventProjection>>> {
    let loaded = state.document.read().await;

    Json(ApiResponse::ok(
        loaded.document.events_projection.clone(),
        "Baseline projection retrieved successfully",
    ))
}
