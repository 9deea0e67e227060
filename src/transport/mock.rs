/*!
 * Mock transport implementation for testing.
 *
 * This module provides a deterministic transport that simulates different
 * behaviors without touching the network:
 * - `MockTransport::ok(body)` - Always succeeds with a 200 response
 * - `MockTransport::failing(status, message)` - Always responds with an error status
 * - `MockTransport::disconnected()` - Always fails at the transport level
 *
 * Every dispatched request is recorded and can be inspected afterwards,
 * which lets tests assert on the exact URLs, methods, and bodies the
 * client produced.
 */

use async_trait::async_trait;
use std::sync::{Arc, Mutex as StdMutex};

use crate::errors::ClientError;
use crate::transport::{Method, Transport, TransportRequest, TransportResponse};

/// A request observed by the mock transport
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Full URL including the query string
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// Headers, if any were set
    pub headers: Option<Vec<(String, String)>>,
    /// Body, if any was set
    pub body: Option<String>,
}

/// Behavior mode for the mock transport
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always responds with the given status, status message, and body
    Respond {
        /// HTTP status code to report
        status: u16,
        /// Status message to report
        status_message: String,
        /// Response body
        body: String,
    },
    /// Always fails at the transport level, simulating a network failure
    Disconnected,
}

/// Mock transport for exercising the client deterministically
#[derive(Debug, Clone)]
pub struct MockTransport {
    /// Behavior mode used when no responder is set
    behavior: MockBehavior,
    /// Custom response generator keyed on the request (optional)
    responder: Option<fn(&str, &TransportRequest) -> TransportResponse>,
    /// Per-URL artificial delay in milliseconds (optional)
    delay_ms_for: Option<fn(&str) -> u64>,
    /// Log of every dispatched request, shared across clones
    requests: Arc<StdMutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    /// Create a mock transport with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            responder: None,
            delay_ms_for: None,
            requests: Arc::new(StdMutex::new(Vec::new())),
        }
    }

    /// Create a transport that always answers 200 OK with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(MockBehavior::Respond {
            status: 200,
            status_message: "OK".to_string(),
            body: body.into(),
        })
    }

    /// Create a transport that always answers with the given status and
    /// status message, and an empty body
    pub fn failing(status: u16, status_message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Respond {
            status,
            status_message: status_message.into(),
            body: String::new(),
        })
    }

    /// Create a transport that always fails at the transport level
    pub fn disconnected() -> Self {
        Self::new(MockBehavior::Disconnected)
    }

    /// Set a custom response generator, overriding the behavior mode
    pub fn with_responder(
        mut self,
        responder: fn(&str, &TransportRequest) -> TransportResponse,
    ) -> Self {
        self.responder = Some(responder);
        self
    }

    /// Set a per-URL delay applied before answering
    pub fn with_delay(mut self, delay_ms_for: fn(&str) -> u64) -> Self {
        self.delay_ms_for = Some(delay_ms_for);
        self
    }

    /// Snapshot of every request dispatched so far, in dispatch order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests dispatched so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Convenience for building a 200 OK response inside a responder
    pub fn ok_response(body: impl Into<String>) -> TransportResponse {
        TransportResponse {
            status: 200,
            status_message: "OK".to_string(),
            body: body.into(),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        url: &str,
        request: TransportRequest,
    ) -> Result<TransportResponse, ClientError> {
        {
            let mut requests = self.requests.lock().unwrap();
            requests.push(RecordedRequest {
                url: url.to_string(),
                method: request.method,
                headers: request.headers.clone(),
                body: request.body.clone(),
            });
        }

        if let Some(delay_ms_for) = self.delay_ms_for {
            let delay_ms = delay_ms_for(url);
            if delay_ms > 0 {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
            }
        }

        if let Some(responder) = self.responder {
            return Ok(responder(url, &request));
        }

        match &self.behavior {
            MockBehavior::Respond {
                status,
                status_message,
                body,
            } => Ok(TransportResponse {
                status: *status,
                status_message: status_message.clone(),
                body: body.clone(),
            }),
            MockBehavior::Disconnected => Err(ClientError::Transport(
                "Simulated connection failure".to_string(),
            )),
        }
    }
}
