//! Error types for the portfolio

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// An href that is not an in-page `#fragment` anchor
    #[error("Invalid anchor: {0}")]
    InvalidAnchor(String),

    /// An in-page anchor that does not name a known section
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// The system clipboard could not be opened or written
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for portfolio operations
pub type Result<T> = std::result::Result<T, PortfolioError>;
