//! # RestResource Trait
//!
//! The `RestResource` trait is the contract a remote resource (Order, ...) implements to be
//! served by the generic [`ResourceClient`](crate::ResourceClient). It names the id type,
//! exposes the id of a value (absent until the server has assigned one), and resolves each
//! logical [`Endpoint`] to a path relative to the configured base URL.
//!
//! Writing the CRUD round trips once against this trait means a new resource only has to
//! describe its schema and its paths.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// The logical operations a client can perform on a resource collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<Id> {
    List,
    Create,
    Update(Id),
    Delete(Id),
}

/// A resource that lives on the REST backend and travels as JSON.
pub trait RestResource: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    /// Server-assigned identifier.
    type Id: Clone + Copy + PartialEq + Display + Debug + Send + Sync + 'static;

    /// The id, or `None` for a draft that has not been created yet.
    fn id(&self) -> Option<Self::Id>;

    /// Relative path for an operation, e.g. `api/orders/` or `api/orders/7/`.
    ///
    /// Paths must not start with `/`; they are joined onto a base URL ending in `/`.
    fn path(endpoint: Endpoint<Self::Id>) -> String;
}
