//! # Application Wiring
//!
//! Builds the object graph in one place:
//!
//! ```text
//! ClientConfig ──► ReqwestTransport ──► OrderClient ──► OrderStore
//! ```
//!
//! Nothing here spawns tasks or holds background resources, so there is no shutdown step;
//! dropping an [`OrderApp`] releases the underlying connection pool.
//!
//! Tests build the same graph over a mock transport with [`OrderApp::with_transport`].

pub mod order_app;

pub use order_app::*;
