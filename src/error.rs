use thiserror::Error;

/// Error type for the configuration and import layers.
///
/// The matching functions themselves are total; errors only come from loading
/// configuration or input data around them.
#[derive(Error, Debug)]
pub enum MatchError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed configuration
    #[error("Config error: {0}")]
    Config(String),

    /// A threshold or percentage outside 0-100
    #[error("Invalid threshold '{name}': {value} (expected 0-100)")]
    InvalidThreshold { name: String, value: f64 },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for MatchError {
    fn from(s: String) -> Self {
        MatchError::Other(s)
    }
}

impl From<&str> for MatchError {
    fn from(s: &str) -> Self {
        MatchError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MatchError>;
