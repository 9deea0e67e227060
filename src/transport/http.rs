use async_trait::async_trait;
use log::error;
use reqwest::Client;
use std::time::Duration;

use crate::errors::ClientError;
use crate::transport::{Method, Transport, TransportRequest, TransportResponse};

/// Production transport backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client for API requests
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default request timeout
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a transport with an explicit request timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .pool_idle_timeout(Duration::from_secs(90))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        url: &str,
        request: TransportRequest,
    ) -> Result<TransportResponse, ClientError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        if let Some(headers) = &request.headers {
            for (name, value) in headers {
                builder = builder.header(name, value);
            }
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("Failed to send {} request to {}: {}", request.method.as_str(), url, e);
            ClientError::Transport(e.to_string())
        })?;

        let status = response.status();
        let status_message = status.canonical_reason().unwrap_or("").to_string();

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_message,
            body,
        })
    }
}
