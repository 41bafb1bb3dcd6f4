use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use compute::{Distributor, UnrankedPolicy};
use moka::future::Cache;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::data_source::DocumentSources;
use crate::schemas::AppState;

pub const DEFAULT_PRIMARY_SOURCE: &str = "assets/mock-data/events-api-response.json";
pub const DEFAULT_FALLBACK_SOURCE: &str = "assets/data/events-api-response.json";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 300;

/// Runtime configuration gathered from the command line and environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub primary_source: PathBuf,
    pub fallback_source: PathBuf,
    pub unranked_policy: UnrankedPolicy,
    pub cache_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            primary_source: PathBuf::from(DEFAULT_PRIMARY_SOURCE),
            fallback_source: PathBuf::from(DEFAULT_FALLBACK_SOURCE),
            unranked_policy: UnrankedPolicy::default(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECONDS),
        }
    }
}

impl AppConfig {
    pub fn sources(&self) -> DocumentSources {
        DocumentSources::new(self.primary_source.clone(), self.fallback_source.clone())
    }

    pub fn distributor(&self) -> Distributor {
        Distributor::new(self.unranked_policy)
    }
}

/// Initialize application state: load the forecast document and build the cache
pub async fn initialize_app_state(config: &AppConfig) -> Result<AppState> {
    debug!("Application config: {:?}", config);

    let sources = config.sources();
    let loaded = sources.load().await;
    info!(
        "Forecast document loaded from {} source: {} days, {} cycles",
        loaded.origin.as_str(),
        loaded.document.events_projection.len(),
        loaded.document.cycles.len()
    );

    // Initialize cache
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(config.cache_ttl)
        .build();

    Ok(AppState {
        document: Arc::new(RwLock::new(loaded)),
        sources,
        distributor: config.distributor(),
        cache,
    })
}
