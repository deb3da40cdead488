//! Error types for Artwork Table
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// Transport-level HTTP failure (connect, TLS, body read)
    #[snafu(display("HTTP error on page {page}: {source}"))]
    Http { page: u32, source: reqwest::Error },

    /// Catalog answered with a non-success status
    #[snafu(display("Catalog returned status {status} for page {page}"))]
    Status { page: u32, status: u16 },

    /// Response body was not a catalog page
    #[snafu(display("Failed to decode page {page}: {source}"))]
    Decode { page: u32, source: serde_json::Error },

    /// Request did not finish in time
    #[snafu(display("Timeout: {message}"))]
    Timeout { message: String },
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
