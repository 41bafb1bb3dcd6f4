use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use compute::UnrankedPolicy;

pub mod commands;

use crate::config::{
    AppConfig, DEFAULT_BIND_ADDRESS, DEFAULT_CACHE_TTL_SECONDS, DEFAULT_FALLBACK_SOURCE,
    DEFAULT_PRIMARY_SOURCE,
};
use commands::{forecast, serve};

#[derive(Parser)]
#[command(name = "eventcast")]
#[command(about = "Event forecast over prioritized cycles, as a web server or a one-shot CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the forecast document comes from and how it is distributed.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the primary forecast document (JSON, or YAML for .yaml/.yml)
    #[arg(long, env = "PRIMARY_SOURCE", default_value = DEFAULT_PRIMARY_SOURCE)]
    pub primary_source: PathBuf,

    /// Path to the document used when the primary source cannot be read
    #[arg(long, env = "FALLBACK_SOURCE", default_value = DEFAULT_FALLBACK_SOURCE)]
    pub fallback_source: PathBuf,

    /// How NEUTRAL cycles are treated
    ///
    /// Values: exclude (never allocate), last-tier (allocate after LOW)
    #[arg(long, env = "UNRANKED_POLICY", default_value = "exclude")]
    pub unranked_policy: UnrankedPolicy,
}

impl SourceArgs {
    pub fn into_config(self, cache_ttl_seconds: u64) -> AppConfig {
        AppConfig {
            primary_source: self.primary_source,
            fallback_source: self.fallback_source,
            unranked_policy: self.unranked_policy,
            cache_ttl: Duration::from_secs(cache_ttl_seconds),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        #[command(flatten)]
        sources: SourceArgs,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// Lifetime of cached forecasts in seconds
        #[arg(long, env = "CACHE_TTL_SECONDS", default_value_t = DEFAULT_CACHE_TTL_SECONDS)]
        cache_ttl_seconds: u64,
    },
    /// Compute a forecast once and print it as JSON
    Forecast {
        #[command(flatten)]
        sources: SourceArgs,

        /// Number of entities to distribute
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
        entity_count: u32,

        /// Cycle names to include (comma-separated, default: all)
        #[arg(short, long)]
        cycles: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                sources,
                bind_address,
                cache_ttl_seconds,
            } => {
                serve(&sources.into_config(cache_ttl_seconds), &bind_address).await?;
            }
            Commands::Forecast {
                sources,
                entity_count,
                cycles,
            } => {
                let config = sources.into_config(DEFAULT_CACHE_TTL_SECONDS);
                forecast(&config, entity_count, cycles.as_deref()).await?;
            }
        }
        Ok(())
    }
}
