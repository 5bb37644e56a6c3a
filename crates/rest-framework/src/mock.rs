//! # Mock Transports & Testing Guide
//!
//! [`MockTransport`] implements [`HttpTransport`] entirely in memory. Queue the responses you
//! want, hand a clone to the client under test, then assert on what was sent. No sockets,
//! no server, fully deterministic.
//!
//! ## When to use Mocks vs a Real Server
//!
//! | Feature | MockTransport | In-process server |
//! |---------|---------------|-------------------|
//! | **Speed** | Instant | Fast (binds a local port) |
//! | **Determinism** | 100% | Subject to the scheduler |
//! | **Error Injection** | Easy (`return_err`, any status) | Requires server support |
//! | **Use Case** | Client and store logic | Wire-level contract of the real transport |
//!
//! ## Pattern 0: Client Logic Test
//!
//! ```rust
//! use rest_framework::mock::MockTransport;
//! use rest_framework::{Endpoint, Method, ResourceClient, RestResource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Tag { id: Option<u32>, label: String }
//!
//! impl RestResource for Tag {
//!     type Id = u32;
//!     fn id(&self) -> Option<u32> { self.id }
//!     fn path(endpoint: Endpoint<u32>) -> String {
//!         match endpoint {
//!             Endpoint::List | Endpoint::Create => "api/tags/".into(),
//!             Endpoint::Update(id) | Endpoint::Delete(id) => format!("api/tags/{}/", id),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockTransport::new();
//!     mock.expect(Method::Get, "/api/tags/")
//!         .return_body(200, r#"[{"id":1,"label":"decaf"}]"#);
//!
//!     let base = "http://127.0.0.1:8000/".parse().unwrap();
//!     let client = ResourceClient::<Tag, _>::new(base, mock.clone());
//!     let tags = client.list().await.unwrap();
//!     assert_eq!(tags[0].label, "decaf");
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Pattern 1: Manual Responder
//!
//! When a test needs to look at a request *before* deciding on the response, use
//! [`create_channel_transport`] and answer each request through its oneshot sender.

use crate::error::NetworkError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned outcome to return for it.
struct Expectation {
    method: Method,
    path: String,
    response: Result<HttpResponse, NetworkError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    received: Vec<HttpRequest>,
}

/// An in-memory transport with expectation tracking.
///
/// Clones share state, so keep one handle for assertions and give another to the client.
///
/// # Example
/// ```ignore
/// let mut mock = MockTransport::new();
/// mock.expect(Method::Get, "/api/orders/").return_body(200, "[]");
/// mock.expect(Method::Delete, "/api/orders/4/").return_body(404, "");
///
/// let client = OrderClient::new(base_url, mock.clone());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Creates a new mock transport with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with this method and URL path (e.g. `/api/orders/3/`).
    pub fn expect(&mut self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            state: Arc::clone(&self.state),
        }
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().received.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let mut state = self.state.lock().unwrap();
        let expectation = state.expectations.pop_front();
        let method = request.method;
        let path = request.url.path().to_string();
        state.received.push(request);
        drop(state);

        match expectation {
            Some(exp) if exp.method == method && exp.path == path => exp.response,
            Some(exp) => panic!(
                "Expectation mismatch: expected {} {}, got {} {}",
                exp.method, exp.path, method, path
            ),
            None => panic!("Unexpected request: {} {}", method, path),
        }
    }
}

/// Builder returned by [`MockTransport::expect`].
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    /// Responds with this status and raw body.
    pub fn return_body(self, status: u16, body: impl Into<Vec<u8>>) {
        self.push(Ok(HttpResponse::new(status, body)));
    }

    /// Responds with this status and `value` serialized as JSON.
    pub fn return_json<V: Serialize>(self, status: u16, value: &V) {
        let body = serde_json::to_vec(value).unwrap();
        self.push(Ok(HttpResponse::new(status, body)));
    }

    /// Fails the exchange at the transport level.
    pub fn return_err(self, error: NetworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<HttpResponse, NetworkError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}

// =============================================================================
// CHANNEL TRANSPORT
// =============================================================================

/// A request waiting for the test to answer it.
pub type PendingRequest = (
    HttpRequest,
    oneshot::Sender<Result<HttpResponse, NetworkError>>,
);

/// Transport that forwards every request to a channel owned by the test.
#[derive(Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<PendingRequest>,
}

#[async_trait]
impl HttpTransport for ChannelTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, NetworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send((request, respond_to))
            .await
            .map_err(|_| NetworkError::Transport("responder closed".to_string()))?;
        response
            .await
            .map_err(|_| NetworkError::Transport("responder dropped request".to_string()))?
    }
}

/// Creates a channel transport and the receiver the test answers from.
///
/// # Testing Strategy
/// The client under test runs in a spawned task; the test pulls each request off the
/// receiver, asserts on it, and sends back whatever outcome it wants to simulate.
pub fn create_channel_transport(
    buffer_size: usize,
) -> (ChannelTransport, mpsc::Receiver<PendingRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelTransport { sender }, receiver)
}

/// Helper to take the next request off a channel transport.
pub async fn expect_request(
    receiver: &mut mpsc::Receiver<PendingRequest>,
) -> Option<PendingRequest> {
    receiver.recv().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Url;

    fn url(path: &str) -> Url {
        Url::parse("http://127.0.0.1:8000/").unwrap().join(path).unwrap()
    }

    #[tokio::test]
    async fn test_mock_transport_with_expectations() {
        let mut mock = MockTransport::new();
        mock.expect(Method::Get, "/api/items/").return_body(200, "[]");
        mock.expect(Method::Delete, "/api/items/2/")
            .return_err(NetworkError::Transport("connection reset".into()));

        let transport = mock.clone();
        let ok = transport
            .send(HttpRequest::new(Method::Get, url("api/items/")))
            .await
            .unwrap();
        assert_eq!(ok.status, 200);

        let err = transport
            .send(HttpRequest::new(Method::Delete, url("api/items/2/")))
            .await;
        assert_eq!(
            err,
            Err(NetworkError::Transport("connection reset".into()))
        );

        assert_eq!(mock.requests().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockTransport::new();
        mock.expect(Method::Get, "/api/items/").return_body(200, "[]");
        mock.verify();
    }

    #[tokio::test]
    async fn test_channel_transport() {
        let (transport, mut receiver) = create_channel_transport(10);

        let call = tokio::spawn(async move {
            let request = HttpRequest::new(Method::Post, url("api/items/"))
                .with_json_body(br#"{"label":"x"}"#.to_vec());
            transport.send(request).await
        });

        let (request, responder) = expect_request(&mut receiver)
            .await
            .expect("Expected a request");
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        responder.send(Ok(HttpResponse::new(201, "{}"))).unwrap();

        let response = call.await.unwrap().unwrap();
        assert_eq!(response.status, 201);
    }
}
