//! Type-safe wrappers around [`ResourceClient`](rest_framework::ResourceClient).

pub mod order_client;

pub use order_client::*;
