//! # ResourceApi Trait
//!
//! Domain clients (e.g. `OrderClient`) wrap a [`ResourceClient`] and implement this trait to
//! inherit the operations that need no resource-specific handling.
use crate::{HttpTransport, NetworkError, ResourceClient, RestResource};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// `list` and `delete`; creation and update stay on the domain client where
/// drafts are built.
#[async_trait]
pub trait ResourceApi<R: RestResource, T: HttpTransport + 'static>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<R, T>;

    /// Fetch the whole collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<R>, NetworkError> {
        tracing::debug!("Sending request");
        self.inner().list().await
    }

    /// Delete a resource by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: R::Id) -> Result<(), NetworkError> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await
    }
}
