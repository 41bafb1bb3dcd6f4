use model::Priority;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::forecast::AllocationDto;

/// Cycle as listed to a presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CycleSummary {
    pub name: String,
    pub priority: Priority,
    pub available_entities: u32,
    /// Events one entity produces today
    pub today_events: u64,
    /// Number of days the cycle contributes to
    pub horizon: usize,
}

/// Outcome of distributing a number of entities.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DistributionReport {
    /// Requested total, as sent by the caller
    pub total: i64,
    pub allocations: Vec<AllocationDto>,
    pub distributed: u64,
    /// Entities that found no capacity
    pub undistributed: u64,
}
