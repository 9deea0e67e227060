/*!
 * Error types for the OneSky client.
 *
 * This module contains the error taxonomy for the crate, using the
 * thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to the OneSky API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Error returned by the API itself (HTTP status above 299)
    #[error("API responded with error: {status_code} - {message}")]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Status message from the server
        message: String,
    },

    /// Error establishing or completing the HTTP exchange, propagated
    /// from the transport without retries
    #[error("Transport error: {0}")]
    Transport(String),

    /// Error when parsing an API response body fails
    #[error("Failed to parse API response: {0}")]
    Parse(String),

    /// Error with the client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

// Utility functions for error conversion
impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

impl From<anyhow::Error> for ClientError {
    fn from(error: anyhow::Error) -> Self {
        Self::Transport(error.to_string())
    }
}
