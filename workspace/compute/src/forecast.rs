use chrono::{NaiveDate, Utc};
use model::{Cycle, EventCounts, ForecastDocument, Priority};
use tracing::{debug, info, instrument};

use crate::calendar::projection_dates;
use crate::distribution::Distributor;
use crate::error::{ComputeError, Result};
use crate::projection::calculate_projection;

/// Entity count used when the caller does not provide one.
pub const DEFAULT_ENTITY_COUNT: u32 = 1;

/// Which cycles of a document take part in a forecast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CycleSelection {
    /// Every cycle of the document.
    #[default]
    All,
    /// Only the cycles with these names.
    Named(Vec<String>),
}

impl CycleSelection {
    /// Builds a selection from a comma-separated list of names.
    ///
    /// `None` or a list without any name selects every cycle.
    pub fn from_csv(names: Option<&str>) -> Self {
        let names: Vec<String> = names
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        if names.is_empty() {
            CycleSelection::All
        } else {
            CycleSelection::Named(names)
        }
    }

    /// Builds a selection from an optional list of names.
    ///
    /// Like [`CycleSelection::from_csv`], `None` or an empty list selects
    /// every cycle.
    pub fn from_names(names: Option<Vec<String>>) -> Self {
        match names {
            Some(names) if !names.is_empty() => CycleSelection::Named(names),
            _ => CycleSelection::All,
        }
    }

    /// Applies the selection to `cycles`, keeping their priority order.
    pub fn apply(&self, cycles: &[Cycle]) -> Result<Vec<Cycle>> {
        let sorted = sorted_by_priority(cycles);

        match self {
            CycleSelection::All => Ok(sorted),
            CycleSelection::Named(names) => {
                if let Some(missing) = names
                    .iter()
                    .find(|name| !cycles.iter().any(|c| &c.name == *name))
                {
                    return Err(ComputeError::UnknownCycle(missing.clone()));
                }

                Ok(sorted
                    .into_iter()
                    .filter(|cycle| names.contains(&cycle.name))
                    .collect())
            }
        }
    }
}

/// Returns the cycles ordered HIGH, MEDIUM, LOW then unranked.
///
/// The sort is stable, cycles of the same priority keep their input order.
pub fn sorted_by_priority(cycles: &[Cycle]) -> Vec<Cycle> {
    let mut sorted = cycles.to_vec();
    sorted.sort_by_key(|cycle| cycle.priority.sort_key());
    sorted
}

/// Entities given to one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleAllocation {
    pub name: String,
    pub priority: Priority,
    pub available_entities: u32,
    pub allocated: u32,
    /// Events one entity of this cycle produces today
    pub today_events: u64,
}

/// One day of a computed forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastDay {
    /// Position in the forecast, 0 is today
    pub index: usize,
    /// Ordinal carried over from the baseline
    pub day: u32,
    pub date: NaiveDate,
    pub events: EventCounts,
}

impl ForecastDay {
    pub fn total(&self) -> u64 {
        self.events.total()
    }
}

/// Result of stacking a distribution of entities on top of a baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forecast {
    pub entity_count: u32,
    pub allocations: Vec<CycleAllocation>,
    pub days: Vec<ForecastDay>,
}

impl Forecast {
    /// Entities actually placed in cycles.
    pub fn distributed(&self) -> u64 {
        self.allocations.iter().map(|a| u64::from(a.allocated)).sum()
    }

    /// Entities that found no capacity.
    pub fn undistributed(&self) -> u64 {
        u64::from(self.entity_count).saturating_sub(self.distributed())
    }

    /// Total events of the first day, 0 without days.
    pub fn today_events(&self) -> u64 {
        self.days.first().map(ForecastDay::total).unwrap_or(0)
    }

    /// Total events of every day, in order.
    pub fn day_totals(&self) -> Vec<u64> {
        self.days.iter().map(ForecastDay::total).collect()
    }
}

/// Computes forecasts from a document.
#[derive(Debug, Clone)]
pub struct Forecaster {
    distributor: Distributor,
    today: NaiveDate,
}

impl Forecaster {
    pub fn new(distributor: Distributor, today: NaiveDate) -> Self {
        Self { distributor, today }
    }

    pub fn distributor(&self) -> &Distributor {
        &self.distributor
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns a forecaster with the same distributor anchored at `today`.
    pub fn with_today(&self, today: NaiveDate) -> Self {
        Self {
            distributor: self.distributor,
            today,
        }
    }

    /// Distributes entities over the selected cycles only.
    ///
    /// Returns the selected cycles in priority order next to their allocation.
    pub fn allocate(
        &self,
        document: &ForecastDocument,
        selection: &CycleSelection,
        total: i64,
    ) -> Result<(Vec<Cycle>, Vec<u32>)> {
        let selected = selection.apply(&document.cycles)?;
        let allocation = self.distributor.distribute(total, &selected);
        Ok((selected, allocation))
    }

    /// Runs selection, distribution and projection for `entity_count`
    /// entities. `None` means the default of one entity.
    #[instrument(skip(self, document), fields(days = document.events_projection.len(), num_cycles = document.cycles.len()))]
    pub fn forecast(
        &self,
        document: &ForecastDocument,
        selection: &CycleSelection,
        entity_count: Option<u32>,
    ) -> Result<Forecast> {
        let entity_count = entity_count.unwrap_or(DEFAULT_ENTITY_COUNT);
        let (selected, allocation) = self.allocate(document, selection, i64::from(entity_count))?;
        debug!("Allocation over {} selected cycles: {:?}", selected.len(), allocation);

        let projection = calculate_projection(&document.events_projection, &selected, &allocation);
        let dates = projection_dates(self.today, projection.len());

        let days = projection
            .into_iter()
            .zip(dates)
            .enumerate()
            .map(|(index, (projection, date))| ForecastDay {
                index,
                day: projection.day,
                date,
                events: projection.events,
            })
            .collect();

        let allocations = selected
            .iter()
            .zip(&allocation)
            .map(|(cycle, &allocated)| CycleAllocation {
                name: cycle.name.clone(),
                priority: cycle.priority,
                available_entities: cycle.available_entities,
                allocated,
                today_events: cycle.today_events(),
            })
            .collect();

        let forecast = Forecast {
            entity_count,
            allocations,
            days,
        };

        info!(
            "Forecast computed: {} of {} entities placed, {} events today",
            forecast.distributed(),
            entity_count,
            forecast.today_events()
        );
        Ok(forecast)
    }
}

/// Returns a default pre-configured forecaster.
///
/// Uses the provided date as "today" or the current UTC date if none is
/// provided, and the default distributor.
pub fn default_forecaster(today: Option<NaiveDate>) -> Forecaster {
    let today = today.unwrap_or_else(|| Utc::now().date_naive());
    Forecaster::new(Distributor::default(), today)
}
