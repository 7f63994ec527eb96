use thiserror::Error;

/// Errors that can occur while loading or searching recipes
#[derive(Error, Debug)]
pub enum BrowseError {
    /// Failed to fetch the recipe list (network or HTTP status)
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Recipe payload could not be deserialized
    #[error("Failed to parse recipes: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Recipe source URL could not be built
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Suggestion provider rejected a query
    #[error("Suggestion provider failed: {0}")]
    ProviderError(String),

    /// A debounced task panicked or was aborted before completing
    #[error("Debounced task failed: {0}")]
    TaskError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, BrowseError>;
