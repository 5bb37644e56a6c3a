//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for a binary built on this framework.
//!
//! ## What Gets Traced
//!
//! - **Round trips**: `Listed`, `Created`, `Updated`, `Deleted` at `info`, with counts and ids
//! - **Payloads**: drafts and updates at `debug`, recorded once via their `Debug` form
//! - **Failures**: unexpected status codes, decode errors and transport errors at `warn`
//!
//! ## Usage
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run -p coffee-order -- list
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run -p coffee-order -- list
//!
//! # Filter to the client layer
//! RUST_LOG=rest_framework=debug cargo run -p coffee-order -- list
//! ```
//!
//! With `RUST_LOG=debug`, creating an order looks like:
//!
//! ```text
//! DEBUG create_order: Create draft=Order { id: None, name: "Martin", coffee_name: Espresso, ... }
//! DEBUG create_order: Response received method=POST url=http://localhost/api/orders/ status=201
//!  INFO create_order: Created id=Some(OrderId(7))
//! ```

/// Initializes the global subscriber. Call once, first thing in `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Spans carry the operation name; module paths are noise
        .compact()
        .init();
}
