//! Error types for mana_reader

use thiserror::Error;

/// Errors raised while looking a card up on Scryfall
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Scryfall returned an error object
    #[error("{code}: {details}")]
    ApiResponse { code: String, details: String },
    /// HTTP error status code without a readable error object
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
}

/// Errors raised while reading a decklist file
#[derive(Debug, Error)]
pub enum DecklistError {
    /// File could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Line has a quantity prefix that is not a positive count
    #[error("Malformed line '{line}': {reason}")]
    MalformedLine { line: String, reason: String },
}

/// Errors that end an analysis run
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read decklist: {0}")]
    Decklist(#[from] DecklistError),
    /// Report could not be written to the output
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
    #[error("Chart window error: {0}")]
    Charts(#[from] eframe::Error),
}

/// Result alias for catalog operations
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
