use crate::clients::OrderClient;
use crate::config::ClientConfig;
use crate::model::{format_total, Order};
use crate::store::OrderStore;
use rest_framework::{HttpTransport, ReqwestTransport};
use tracing::info;

/// A configured order store plus the configuration it was built from.
///
/// # Example
///
/// ```ignore
/// let config = ClientConfig::from_env()?;
/// let mut app = OrderApp::new(config);
///
/// app.store.load().await;
/// for order in app.store.orders() {
///     println!("{}", app.row(order));
/// }
/// ```
pub struct OrderApp<T: HttpTransport = ReqwestTransport> {
    pub config: ClientConfig,
    pub store: OrderStore<T>,
}

impl OrderApp<ReqwestTransport> {
    /// Wires the production transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpTransport + 'static> OrderApp<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        info!(
            environment = %config.environment,
            base_url = %config.base_url,
            "Wiring order client"
        );
        let client = OrderClient::new(config.base_url.clone(), transport);
        Self {
            config,
            store: OrderStore::new(client),
        }
    }

    /// Total in the configured currency, e.g. `"75.00 CZK"`.
    pub fn display_total(&self, total: f64) -> String {
        format_total(total, &self.config.currency)
    }

    /// One list row: customer name, drink summary and total.
    pub fn row(&self, order: &Order) -> String {
        let id = order
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "#{:<4} {:<16} {:<24} {}",
            id,
            order.name,
            order.summary(),
            self.display_total(order.total)
        )
    }
}
