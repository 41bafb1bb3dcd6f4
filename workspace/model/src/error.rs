use thiserror::Error;

/// Error types for the model crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Priority text that is not one of HIGH, MEDIUM, LOW or NEUTRAL
    #[error("Unknown priority: {0}")]
    UnknownPriority(String),
}

/// Type alias for Result with ModelError
pub type Result<T> = std::result::Result<T, ModelError>;
