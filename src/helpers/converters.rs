use common::{AllocationDto, CycleSummary, DistributionReport, ForecastDayDto, ForecastReport};
use compute::{CycleAllocation, Forecast, ForecastDay};
use model::Cycle;

/// Converts a computed forecast into its transport shape
pub fn forecast_to_report(forecast: &Forecast) -> ForecastReport {
    ForecastReport {
        entity_count: forecast.entity_count,
        allocations: forecast.allocations.iter().map(allocation_to_dto).collect(),
        distributed: forecast.distributed(),
        undistributed: forecast.undistributed(),
        today_events: forecast.today_events(),
        days: forecast.days.iter().map(day_to_dto).collect(),
    }
}

fn allocation_to_dto(allocation: &CycleAllocation) -> AllocationDto {
    AllocationDto {
        name: allocation.name.clone(),
        priority: allocation.priority,
        available_entities: allocation.available_entities,
        allocated: allocation.allocated,
        today_events: allocation.today_events,
    }
}

fn day_to_dto(day: &ForecastDay) -> ForecastDayDto {
    ForecastDayDto {
        index: day.index,
        day: day.day,
        date: day.date,
        events: day.events,
        total: day.total(),
    }
}

/// Summarizes a cycle for listing
pub fn cycle_to_summary(cycle: &Cycle) -> CycleSummary {
    CycleSummary {
        name: cycle.name.clone(),
        priority: cycle.priority,
        available_entities: cycle.available_entities,
        today_events: cycle.today_events(),
        horizon: cycle.horizon(),
    }
}

/// Pairs each cycle with its allocation
pub fn distribution_to_report(total: i64, cycles: &[Cycle], allocation: &[u32]) -> DistributionReport {
    let allocations: Vec<AllocationDto> = cycles
        .iter()
        .zip(allocation)
        .map(|(cycle, &allocated)| AllocationDto {
            name: cycle.name.clone(),
            priority: cycle.priority,
            available_entities: cycle.available_entities,
            allocated,
            today_events: cycle.today_events(),
        })
        .collect();

    let distributed: u64 = allocations.iter().map(|a| u64::from(a.allocated)).sum();
    let requested = u64::try_from(total).unwrap_or(0);

    DistributionReport {
        total,
        allocations,
        distributed,
        undistributed: requested.saturating_sub(distributed),
    }
}
