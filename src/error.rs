use thiserror::Error;

/// Main error type for the leaderboard engine
#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File source I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record provider errors
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// Malformed query parameter
    #[error("Invalid query parameter: {0}")]
    Query(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for LeaderboardError {
    fn from(s: String) -> Self {
        LeaderboardError::Other(s)
    }
}

impl From<&str> for LeaderboardError {
    fn from(s: &str) -> Self {
        LeaderboardError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LeaderboardError>;
