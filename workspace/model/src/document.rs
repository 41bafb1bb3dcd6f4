use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cycle::{Cycle, CycleDay, Priority};
use crate::projection::EventProjection;

/// Number of days in the built-in fallback document.
pub const FALLBACK_DAYS: u32 = 5;

/// Name of the single cycle in the built-in fallback document.
pub const FALLBACK_CYCLE_NAME: &str = "Default cycle";

/// The document a forecast is computed from: a baseline projection and the
/// cycles that can be stacked on top of it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDocument {
    #[serde(default)]
    pub events_projection: Vec<EventProjection>,
    #[serde(default)]
    pub cycles: Vec<Cycle>,
}

impl ForecastDocument {
    pub fn new(events_projection: Vec<EventProjection>, cycles: Vec<Cycle>) -> Self {
        Self {
            events_projection,
            cycles,
        }
    }

    /// Document used when no source could be read: five zeroed days and one
    /// HIGH cycle with a single available entity.
    pub fn fallback() -> Self {
        let events_projection = (1..=FALLBACK_DAYS).map(EventProjection::empty).collect();
        let structure = (1..=FALLBACK_DAYS)
            .map(|day| CycleDay {
                day,
                ..CycleDay::default()
            })
            .collect();

        Self {
            events_projection,
            cycles: vec![Cycle::with_structure(
                FALLBACK_CYCLE_NAME,
                1,
                Priority::High,
                structure,
            )],
        }
    }

    /// Looks up a cycle by name.
    pub fn cycle(&self, name: &str) -> Option<&Cycle> {
        self.cycles.iter().find(|c| c.name == name)
    }
}
