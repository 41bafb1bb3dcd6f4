use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use common::ForecastReport;
use compute::{CycleSelection, Forecaster, error::ComputeError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::extractors::{ValidJson, ValidQuery};
use crate::helpers::converters::forecast_to_report;
use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse, error_response};

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    /// Number of entities to distribute (default: 1)
    #[validate(range(min = 1, max = 1000000))]
    pub entity_count: Option<u32>,
    /// Cycle names to include (comma-separated, default: all)
    pub cycles: Option<String>,
}

/// Request body for computing a forecast
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct ForecastRequest {
    /// Number of entities to distribute (default: 1)
    #[validate(range(min = 1, max = 1000000))]
    pub entity_count: Option<u32>,
    /// Cycle names to include (default: all)
    pub cycles: Option<Vec<String>>,
}

/// Maps a compute error to an HTTP error response
pub(crate) fn compute_error_response(err: ComputeError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ComputeError::UnknownCycle(name) => error_response(
            StatusCode::BAD_REQUEST,
            "UNKNOWN_CYCLE",
            format!("Unknown cycle: {}", name),
        ),
        ComputeError::Configuration(message) => {
            error!("Unexpected configuration error: {}", message);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR", message)
        }
    }
}

/// Computes a forecast, going through the cache
///
/// The document read guard is held until the report is cached, and the key
/// carries the document generation, so a report built from a document that
/// has since been reloaded is never served.
async fn compute_forecast(
    state: &AppState,
    selection: CycleSelection,
    entity_count: Option<u32>,
) -> Result<ForecastReport, (StatusCode, Json<ErrorResponse>)> {
    let today = Utc::now().date_naive();
    let loaded = state.document.read().await;
    let cache_key = format!(
        "forecast_{}_{}_{:?}_{:?}",
        loaded.generation, today, entity_count, selection
    );

    if let Some(CachedData::Forecast(report)) = state.cache.get(&cache_key).await {
        debug!("Forecast served from cache");
        return Ok(report);
    }

    let forecast = Forecaster::new(state.distributor, today)
        .forecast(&loaded.document, &selection, entity_count)
        .map_err(compute_error_response)?;

    let report = forecast_to_report(&forecast);
    state.cache.insert(cache_key, CachedData::Forecast(report.clone())).await;

    Ok(report)
}

/// Get a forecast for a number of entities
#[utoipa::path(
    get,
    path = "/api/v1/forecast",
    tag = "forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Forecast computed successfully", body = ApiResponse<ForecastReport>),
        (status = 400, description = "Invalid request, entity count out of range or unknown cycle", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_forecast(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ForecastQuery>,
) -> Result<Json<ApiResponse<ForecastReport>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering get_forecast function");

    let selection = CycleSelection::from_csv(query.cycles.as_deref());
    let report = compute_forecast(&state, selection, query.entity_count).await?;
    info!(
        "Forecast for {} entities: {} events today",
        report.entity_count, report.today_events
    );

    Ok(Json(ApiResponse::ok(report, "Forecast computed successfully")))
}

/// Compute a forecast from a request body
#[utoipa::path(
    post,
    path = "/api/v1/forecast",
    tag = "forecast",
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "Forecast computed successfully", body = ApiResponse<ForecastReport>),
        (status = 400, description = "Invalid request, entity count out of range or unknown cycle", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_forecast(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<ForecastRequest>,
) -> Result<Json<ApiResponse<ForecastReport>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_forecast function");

    let selection = CycleSelection::from_names(request.cycles);
    let report = compute_forecast(&state, selection, request.entity_count).await?;

    Ok(Json(ApiResponse::ok(report, "Forecast computed successfully")))
}
