use anyhow::{Context, Result};
use chrono::Utc;
use compute::{CycleSelection, Forecaster};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::helpers::converters::forecast_to_report;

/// Computes a single forecast and prints the report as JSON on stdout.
pub async fn forecast(config: &AppConfig, entity_count: u32, cycles: Option<&str>) -> Result<()> {
    let loaded = config.sources().load().await;
    info!("Using forecast document from {} source", loaded.origin.as_str());

    let selection = CycleSelection::from_csv(cycles);
    debug!("Cycle selection: {:?}", selection);

    let forecaster = Forecaster::new(config.distributor(), Utc::now().date_naive());
    let forecast = forecaster
        .forecast(&loaded.document, &selection, Some(entity_count))
        .context("Failed to compute forecast")?;

    let report = forecast_to_report(&forecast);
    let output = serde_json::to_string_pretty(&report).context("Failed to serialize forecast")?;
    println!("{}", output);

    Ok(())
}
