//! # Order Client
//!
//! Provides the four order operations the store needs. It wraps a
//! `ResourceClient<Order, T>`; `list` and `delete` come from [`ResourceApi`], and
//! create/update are exposed under order-specific names.
use crate::model::{Order, OrderId};
use rest_framework::{HttpTransport, NetworkError, ResourceApi, ResourceClient, Url};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the `api/orders/` endpoints.
#[derive(Clone)]
pub struct OrderClient<T: HttpTransport> {
    inner: ResourceClient<Order, T>,
}

impl<T: HttpTransport + 'static> OrderClient<T> {
    pub fn new(base_url: Url, transport: T) -> Self {
        Self {
            inner: ResourceClient::new(base_url, transport),
        }
    }

    /// `GET api/orders/`. All-or-nothing: any failure yields an error, never a partial list.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, NetworkError> {
        self.list().await
    }

    /// `POST api/orders/`. Returns the server's copy with its id and `created_at`.
    #[instrument(skip(self, draft))]
    pub async fn create_order(&self, draft: &Order) -> Result<Order, NetworkError> {
        debug!(?draft, "create_order called");
        info!("Sending create_order");
        self.inner.create(draft).await
    }

    /// `PUT api/orders/{id}/`. Fails with [`NetworkError::MissingId`] before any call
    /// when `order.id` is `None`.
    #[instrument(skip(self, order), fields(id = ?order.id))]
    pub async fn update_order(&self, order: &Order) -> Result<Order, NetworkError> {
        debug!(?order, "update_order called");
        self.inner.update(order).await
    }

    /// `DELETE api/orders/{id}/`. The response body is ignored.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), NetworkError> {
        self.delete(id).await
    }
}

#[async_trait]
impl<T: HttpTransport + 'static> ResourceApi<Order, T> for OrderClient<T> {
    fn inner(&self) -> &ResourceClient<Order, T> {
        &self.inner
    }
}
