use chrono::NaiveDate;
use model::{EventCounts, Priority};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Entities given to one cycle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AllocationDto {
    pub name: String,
    pub priority: Priority,
    pub available_entities: u32,
    pub allocated: u32,
    /// Events one entity of this cycle produces today
    pub today_events: u64,
}

/// One day of a forecast.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastDayDto {
    /// Position in the forecast, 0 is today
    pub index: usize,
    pub day: u32,
    pub date: NaiveDate,
    pub events: EventCounts,
    /// Sum of all event kinds for the day
    pub total: u64,
}

/// Forecast for a number of entities over the selected cycles.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastReport {
    pub entity_count: u32,
    pub allocations: Vec<AllocationDto>,
    pub distributed: u64,
    pub undistributed: u64,
    pub today_events: u64,
    pub days: Vec<ForecastDayDto>,
}
