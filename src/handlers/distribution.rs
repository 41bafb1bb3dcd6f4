use axum::{extract::State, http::StatusCode, response::Json};
use common::DistributionReport;
use chrono::Utc;
use compute::{CycleSelection, Forecaster};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::handlers::forecast::compute_error_response;
use crate::helpers::converters::distribution_to_report;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Request body for distributing entities
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DistributionRequest {
    /// Entities to distribute; zero or negative distributes nothing
    pub total: i64,
    /// Cycle names to include (default: all)
    pub cycles: Option<Vec<String>>,
}

/// Distribute entities over cycles without projecting events
#[utoipa::path(
    post,
    path = "/api/v1/distribution",
    tag = "distribution",
    request_body = DistributionRequest,
    responses(
        (status = 200, description = "Entities distributed successfully", body = ApiResponse<DistributionReport>),
        (status = 400, description = "Unknown cycle", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_distribution(
    State(state): State<AppState>,
    Json(request): Json<DistributionRequest>,
) -> Result<Json<ApiResponse<DistributionReport>>, (StatusCode, Json<ErrorResponse>)> {
    let selection = CycleSelection::from_names(request.cycles);
    let forecaster = Forecaster::new(state.distributor, Utc::now().date_naive());

    let loaded = state.document.read().await;
    let (cycles, allocation) = forecaster
        .allocate(&loaded.document, &selection, request.total)
        .map_err(compute_error_response)?;
    debug!("Distributed {} entities as {:?}", request.total, allocation);

    let report = distribution_to_report(request.total, &cycles, &allocation);
    Ok(Json(ApiResponse::ok(report, "Entities distributed successfully")))
}
