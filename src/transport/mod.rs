/*!
 * Transport implementations for dispatching API requests.
 *
 * This module contains the seam between request composition and socket
 * I/O. The client performs no network calls itself; it hands a fully
 * built URL and request to an injected transport:
 * - Http: production transport over reqwest
 * - Mock: deterministic, scriptable transport for tests
 */

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::errors::ClientError;

/// HTTP method of an outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully composed request handed to the transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,

    /// Headers in insertion order, if any
    pub headers: Option<Vec<(String, String)>>,

    /// Request body, if any
    pub body: Option<String>,
}

impl TransportRequest {
    /// A GET request with no headers or body
    pub fn get() -> Self {
        Self {
            method: Method::Get,
            headers: None,
            body: None,
        }
    }

    /// A POST request with the given headers and body
    pub fn post(headers: Vec<(String, String)>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            headers: Some(headers),
            body: Some(body.into()),
        }
    }
}

/// The response surface the client needs from a transport
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,

    /// Status line message reported by the server
    pub status_message: String,

    /// Raw response body
    pub body: String,
}

impl TransportResponse {
    /// Parse the body as JSON into the requested type
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Borrow the raw body text
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consume the response, yielding the raw body text
    pub fn into_text(self) -> String {
        self.body
    }
}

/// Common trait for all transports
///
/// This trait defines the interface the client uses to dispatch requests,
/// allowing the production HTTP transport and test doubles to be used
/// interchangeably.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Dispatch a request to the given URL
    ///
    /// # Arguments
    /// * `url` - The fully composed URL including the query string
    /// * `request` - Method, headers, and body of the request
    ///
    /// # Returns
    /// * `Result<TransportResponse, ClientError>` - The response, or a
    ///   transport-level failure propagated unchanged
    async fn send(&self, url: &str, request: TransportRequest)
        -> Result<TransportResponse, ClientError>;
}

pub mod http;
pub mod mock;
