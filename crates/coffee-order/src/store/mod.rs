//! # Order Store
//!
//! The view-model between the presentation layer and the [`OrderClient`]. It owns the
//! authoritative in-memory order list, the loading and error state shown by the list screen,
//! and the transient add/edit form.
//!
//! ## Reconciliation Rules
//!
//! Every mutating operation awaits exactly one REST call and only touches the list after a
//! fully successful round trip:
//!
//! | Operation | On success | On failure |
//! |-----------|------------|------------|
//! | [`load`](OrderStore::load) | replace the list | set `error_message`, list untouched |
//! | [`submit`](OrderStore::submit) | append server copy | return `StoreError` |
//! | [`save_edit`](OrderStore::save_edit) | replace entry with matching id | return `StoreError` |
//! | [`remove`](OrderStore::remove) | drop entry with matching id | return `StoreError` |
//!
//! ## Observing Changes
//!
//! Presentation code can either read the getters after each call or
//! [`subscribe`](OrderStore::subscribe) to a `watch` channel that receives a fresh
//! [`StoreSnapshot`] after every state change.

pub mod error;
pub mod form;

pub use error::*;
pub use form::*;

use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use rest_framework::HttpTransport;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// The list-screen state published to subscribers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreSnapshot {
    pub orders: Vec<Order>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

pub struct OrderStore<T: HttpTransport> {
    client: OrderClient<T>,
    orders: Vec<Order>,
    is_loading: bool,
    error_message: Option<String>,
    validation_error: Option<String>,
    edit_target: Option<EditTarget>,
    snapshots: watch::Sender<StoreSnapshot>,
    /// Add/edit form fields, bound directly by the presentation layer.
    pub form: OrderForm,
}

impl<T: HttpTransport + 'static> OrderStore<T> {
    pub fn new(client: OrderClient<T>) -> Self {
        let (snapshots, _) = watch::channel(StoreSnapshot::default());
        Self {
            client,
            orders: Vec::new(),
            is_loading: false,
            error_message: None,
            validation_error: None,
            edit_target: None,
            snapshots,
            form: OrderForm::default(),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// The order `save_edit` will update, if `begin_edit` has been called.
    pub fn edit_target(&self) -> Option<EditTarget> {
        self.edit_target
    }

    /// Derived price of the size currently selected in the form.
    pub fn price(&self) -> f64 {
        self.form.price()
    }

    pub fn find(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == Some(id))
    }

    /// Receives a [`StoreSnapshot`] after every list/loading/error change.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.snapshots.subscribe()
    }

    /// Fetches the full list, replacing the current one on success.
    ///
    /// Never fails: errors become a human-readable `error_message`. `is_loading` is
    /// cleared at the end whatever the outcome.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.is_loading = true;
        self.error_message = None;
        self.publish();

        match self.client.list_orders().await {
            Ok(orders) => {
                info!(count = orders.len(), "Orders loaded");
                self.orders = orders;
            }
            Err(e) => {
                warn!(error = %e, "Load failed");
                self.error_message = Some(format!("Cannot load the data: {}", e));
            }
        }

        self.is_loading = false;
        self.publish();
    }

    /// Posts the form as a new order and appends the server's copy.
    ///
    /// The draft has no id, an empty `created_at`, and `total` equal to the selected
    /// size's price. Presentation is expected to call [`validate`](Self::validate) first.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Order, StoreError> {
        let draft = self.form.to_order(None);
        debug!(?draft, "Submitting");

        let created = self.client.create_order(&draft).await?;
        self.orders.push(created.clone());
        self.publish();
        Ok(created)
    }

    /// Copies `order` into the form and remembers it as the edit target.
    pub fn begin_edit(&mut self, order: &Order) {
        debug!(id = ?order.id, "Begin edit");
        self.form.fill_from(order);
        self.edit_target = Some(EditTarget { order_id: order.id });
    }

    /// Sends the form as an update of the edit target and replaces the matching entry.
    ///
    /// Fails with [`StoreError::MissingEditTarget`] if [`begin_edit`](Self::begin_edit)
    /// was never called. No network call is made in that case.
    #[instrument(skip(self))]
    pub async fn save_edit(&mut self) -> Result<Order, StoreError> {
        let target = self.edit_target.ok_or_else(|| {
            warn!("save_edit without edit target");
            StoreError::MissingEditTarget
        })?;
        let order = self.form.to_order(target.order_id);

        let updated = self.client.update_order(&order).await?;
        if let Some(slot) = self.orders.iter_mut().find(|o| o.id == order.id) {
            *slot = updated.clone();
        }
        self.publish();
        Ok(updated)
    }

    /// Deletes on the server, then drops the entry with this id.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, id: OrderId) -> Result<(), StoreError> {
        self.client.delete_order(id).await?;
        self.orders.retain(|order| order.id != Some(id));
        self.publish();
        Ok(())
    }

    /// Checks that the name is not blank, recording a form-level message if it is.
    pub fn validate(&mut self) -> bool {
        self.validation_error = None;
        if !self.form.is_valid() {
            self.validation_error = Some(NAME_REQUIRED.to_string());
            return false;
        }
        true
    }

    /// Empty name, Espresso, Medium.
    pub fn reset_form(&mut self) {
        self.form = OrderForm::default();
    }

    fn publish(&self) {
        self.snapshots.send_replace(StoreSnapshot {
            orders: self.orders.clone(),
            is_loading: self.is_loading,
            error_message: self.error_message.clone(),
        });
    }
}
