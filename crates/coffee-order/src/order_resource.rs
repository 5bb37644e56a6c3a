//! RestResource implementation for the Order domain type.
//!
//! This impl is the endpoint resolver: it maps each logical operation to a path relative
//! to the configured base URL. No query parameters, no pagination cursor.
//!
//! | Operation | Path |
//! |-----------|------|
//! | list, create | `api/orders/` |
//! | update(id), delete(id) | `api/orders/{id}/` |

use crate::model::{Order, OrderId};
use rest_framework::{Endpoint, RestResource};

/// Collection path, relative to the base URL.
pub const ORDERS_PATH: &str = "api/orders/";

impl RestResource for Order {
    type Id = OrderId;

    fn id(&self) -> Option<OrderId> {
        self.id
    }

    fn path(endpoint: Endpoint<OrderId>) -> String {
        match endpoint {
            Endpoint::List | Endpoint::Create => ORDERS_PATH.to_string(),
            Endpoint::Update(id) | Endpoint::Delete(id) => format!("{}{}/", ORDERS_PATH, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Order::path(Endpoint::List), "api/orders/");
        assert_eq!(Order::path(Endpoint::Create), "api/orders/");
        assert_eq!(Order::path(Endpoint::Update(OrderId(7))), "api/orders/7/");
        assert_eq!(Order::path(Endpoint::Delete(OrderId(42))), "api/orders/42/");
    }
}
