use std::path::{Path, PathBuf};

use model::ForecastDocument;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, instrument, warn};
use utoipa::ToSchema;

/// Errors raised while reading a forecast document.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON document {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML document {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Where the document currently in use came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentOrigin {
    Primary,
    Fallback,
    /// Built-in document used when no source could be read
    Default,
}

impl DocumentOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentOrigin::Primary => "primary",
            DocumentOrigin::Fallback => "fallback",
            DocumentOrigin::Default => "default",
        }
    }
}

/// A document together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: ForecastDocument,
    pub origin: DocumentOrigin,
    /// Bumped on every reload, 0 for the document loaded at startup
    pub generation: u64,
}

impl LoadedDocument {
    pub fn new(document: ForecastDocument, origin: DocumentOrigin) -> Self {
        Self {
            document,
            origin,
            generation: 0,
        }
    }

    /// Marks this document as replacing `previous`.
    pub fn succeeding(mut self, previous: &LoadedDocument) -> Self {
        self.generation = previous.generation.wrapping_add(1);
        self
    }
}

/// Primary and fallback locations of the forecast document.
#[derive(Debug, Clone)]
pub struct DocumentSources {
    pub primary: PathBuf,
    pub fallback: PathBuf,
}

impl DocumentSources {
    pub fn new(primary: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    /// Loads the primary document, then the fallback, then the built-in
    /// default. Failures are logged and never returned.
    #[instrument(skip(self), fields(primary = %self.primary.display(), fallback = %self.fallback.display()))]
    pub async fn load(&self) -> LoadedDocument {
        match read_document(&self.primary).await {
            Ok(document) => {
                info!("Loaded forecast document from primary source");
                return LoadedDocument::new(document, DocumentOrigin::Primary);
            }
            Err(e) => error!("Failed to load primary source: {}", e),
        }

        info!("Trying fallback source");
        match read_document(&self.fallback).await {
            Ok(document) => {
                info!("Loaded forecast document from fallback source");
                LoadedDocument::new(document, DocumentOrigin::Fallback)
            }
            Err(e) => {
                error!("Failed to load fallback source: {}", e);
                warn!("Using built-in default document");
                LoadedDocument::new(ForecastDocument::fallback(), DocumentOrigin::Default)
            }
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Reads and parses a single document. `.yaml`/`.yml` files are parsed as
/// YAML, anything else as JSON.
pub async fn read_document(path: &Path) -> Result<ForecastDocument, SourceError> {
    debug!("Reading forecast document from {}", path.display());
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|source| SourceError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(&content).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
