use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// Client configuration module
/// This module holds the credentials and project identity supplied once at
/// client construction. The values are immutable for the lifetime of the
/// client; independent clients can carry independent configurations.
/// Represents the OneSky client configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    /// Public API key sent with every request
    pub api_key: String,

    /// Shared signing secret, used to derive the per-request dev hash
    pub secret: String,

    /// Project identifier addressed by every resource path
    pub project_id: String,
}

impl ClientConfig {
    /// Create a new configuration from credentials and a project id
    pub fn new(
        api_key: impl Into<String>,
        secret: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
            project_id: project_id.into(),
        }
    }

    /// Validate the configuration
    ///
    /// All three fields are required by the API; an empty value would
    /// produce requests the server rejects, so it is caught here instead.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.api_key.is_empty() {
            return Err(ClientError::Config("api_key must not be empty".to_string()));
        }
        if self.secret.is_empty() {
            return Err(ClientError::Config("secret must not be empty".to_string()));
        }
        if self.project_id.is_empty() {
            return Err(ClientError::Config(
                "project_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
