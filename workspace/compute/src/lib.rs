pub mod calendar;
pub mod distribution;
pub mod error;
pub mod forecast;
pub mod projection;

#[cfg(test)]
pub mod testing;

pub use distribution::{Distributor, UnrankedPolicy, distribute_entities};
pub use forecast::{
    CycleAllocation, CycleSelection, Forecast, ForecastDay, Forecaster, default_forecaster,
    sorted_by_priority,
};
pub use projection::calculate_projection;
