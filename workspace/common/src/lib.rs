//! Common transport-layer types shared by the HTTP handlers and the CLI.
//! These structs are the JSON shapes the API answers with, so a
//! presentation layer can deserialize responses without duplicating them.

mod cycles;
mod forecast;

pub use cycles::{CycleSummary, DistributionReport};
pub use forecast::{AllocationDto, ForecastDayDto, ForecastReport};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}
