//! # REST Framework
//!
//! This crate provides the building blocks for type-safe CRUD clients of a JSON REST
//! backend. It follows a **Resource-Oriented** shape: every remote resource supports the same
//! small set of operations (list, create, update, delete), so the HTTP plumbing is written
//! once and each resource only describes its schema and its paths.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Resource Layer** ([`RestResource`]): the wire schema and endpoint paths of a resource
//! 2. **Client Layer** ([`ResourceClient`]): one request per call, status check, (de)serialization,
//!    mapping of every failure into [`NetworkError`]
//! 3. **Transport Layer** ([`HttpTransport`]): the actual exchange ([`ReqwestTransport`] in
//!    production, [`mock::MockTransport`] in tests)
//!
//! ## Core Abstractions
//!
//! ```rust
//! use rest_framework::{Endpoint, ReqwestTransport, ResourceClient, RestResource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Bean {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     id: Option<u32>,
//!     origin: String,
//! }
//!
//! impl RestResource for Bean {
//!     type Id = u32;
//!     fn id(&self) -> Option<u32> { self.id }
//!     fn path(endpoint: Endpoint<u32>) -> String {
//!         match endpoint {
//!             Endpoint::List | Endpoint::Create => "api/beans/".into(),
//!             Endpoint::Update(id) | Endpoint::Delete(id) => format!("api/beans/{}/", id),
//!         }
//!     }
//! }
//!
//! let base = "http://127.0.0.1:8000/".parse().unwrap();
//! let client = ResourceClient::<Bean, _>::new(base, ReqwestTransport::new());
//! assert_eq!(
//!     client.resolve(Endpoint::Delete(3)).unwrap().as_str(),
//!     "http://127.0.0.1:8000/api/beans/3/"
//! );
//! ```
//!
//! ## Concurrency Model
//!
//! - Each call issues at most one request and awaits it to completion
//! - No retries, no caching, no cancellation, no client-side timeout
//! - Clients are cheap to clone and share one transport
//!
//! ## Testing
//!
//! See the [`mock`] module for in-memory transports with expectations and request recording.

pub mod client;
pub mod client_trait;
pub mod error;
pub mod mock;
pub mod resource;
pub mod tracing;
pub mod transport;

// Re-export core types for convenience
pub use client::ResourceClient;
pub use client_trait::ResourceApi;
pub use error::NetworkError;
pub use resource::{Endpoint, RestResource};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};
pub use reqwest::Url;
