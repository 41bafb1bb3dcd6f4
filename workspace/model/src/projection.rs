use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cycle::CycleDay;

/// Event counts for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct EventCounts {
    #[serde(default)]
    pub meetings: u64,
    #[serde(default)]
    pub emails: u64,
    #[serde(default)]
    pub calls: u64,
    #[serde(default)]
    pub follows: u64,
}

impl EventCounts {
    pub fn new(meetings: u64, emails: u64, calls: u64, follows: u64) -> Self {
        Self {
            meetings,
            emails,
            calls,
            follows,
        }
    }

    /// Sum of the four event kinds.
    pub fn total(&self) -> u64 {
        self.meetings
            .saturating_add(self.emails)
            .saturating_add(self.calls)
            .saturating_add(self.follows)
    }

    /// Adds `day` multiplied by `factor` to these counts.
    ///
    /// Arithmetic saturates instead of overflowing.
    pub fn add_scaled(&mut self, day: &CycleDay, factor: u32) {
        let factor = u64::from(factor);
        self.meetings = self.meetings.saturating_add(day.meetings.saturating_mul(factor));
        self.emails = self.emails.saturating_add(day.emails.saturating_mul(factor));
        self.calls = self.calls.saturating_add(day.calls.saturating_mul(factor));
        self.follows = self.follows.saturating_add(day.follows.saturating_mul(factor));
    }
}

/// Forecast for one day.
///
/// Projections are combined by position in their sequence; `day` is kept for
/// display and never used for alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct EventProjection {
    /// 1-based ordinal of the day
    pub day: u32,
    #[serde(default)]
    pub events: EventCounts,
}

impl EventProjection {
    pub fn new(day: u32, events: EventCounts) -> Self {
        Self { day, events }
    }

    /// A day without any events.
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            events: EventCounts::default(),
        }
    }
}
