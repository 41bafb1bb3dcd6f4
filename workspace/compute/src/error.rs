use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    /// A selected cycle name is not part of the document
    #[error("Unknown cycle: {0}")]
    UnknownCycle(String),

    /// Invalid compute configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
