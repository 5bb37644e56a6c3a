//! # Coffee Order
//!
//! Client side of a small coffee-ordering service. It lists, places, edits and deletes
//! orders held by a JSON REST backend at `api/orders/`.
//!
//! - **[model]**: [`Order`](model::Order), its menu enums, prices and display helpers
//! - **[order_resource]**: endpoint paths for orders
//! - **[clients]**: [`OrderClient`](clients::OrderClient), the four REST operations
//! - **[store]**: [`OrderStore`](store::OrderStore), list state and the add/edit form
//! - **[config]**: environment selection and base URL
//! - **[lifecycle]**: wiring of the above
//!
//! The HTTP plumbing lives in the `rest-framework` crate.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_resource;
pub mod store;
