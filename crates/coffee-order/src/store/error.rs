//! Error types for the order store.

use rest_framework::NetworkError;
use thiserror::Error;

/// Errors surfaced by the mutating store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The REST call failed; the list was left untouched.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// `save_edit` was called without a preceding `begin_edit`.
    #[error("No order selected for editing")]
    MissingEditTarget,
}
