//! Error types for monitoring operations

/// Result type for monitoring operations
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Error types for the monitoring pipeline
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Metrics probe failure
    #[error("Probe error: {0}")]
    Probe(String),

    /// Record sink failure
    #[error("Sink error: {0}")]
    Sink(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
