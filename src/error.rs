use thiserror::Error;

/// Errors that can occur while importing a recipe from a web page
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to fetch the page from the target URL
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// No extractor could produce a recipe from the page
    #[error("No extractor could parse the recipe from this webpage")]
    NoExtractorMatched,

    /// Error building the outbound HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Server socket error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
