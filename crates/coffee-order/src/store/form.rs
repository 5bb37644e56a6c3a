//! Transient add/edit form state.

use crate::model::{price_for, CoffeeName, CoffeeSize, Order, OrderId};

pub const NAME_REQUIRED: &str = "Name cannot be empty!";

/// Fields of the add/edit form. Defaults: empty name, Espresso, Medium.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub name: String,
    pub coffee_name: CoffeeName,
    pub size: CoffeeSize,
}

impl OrderForm {
    /// Derived price of the selected size.
    pub fn price(&self) -> f64 {
        price_for(self.size)
    }

    /// `true` when the name has something other than whitespace.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Builds the Order the form describes. `created_at` is always empty; the server owns it.
    pub fn to_order(&self, id: Option<OrderId>) -> Order {
        Order::new(
            id,
            self.name.clone(),
            self.coffee_name,
            self.price(),
            self.size,
            "",
        )
    }

    /// Copies an existing order's editable fields.
    pub fn fill_from(&mut self, order: &Order) {
        self.name = order.name.clone();
        self.coffee_name = order.coffee_name;
        self.size = order.size;
    }
}

/// Which order `save_edit` will update. Set only by `begin_edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTarget {
    pub order_id: Option<OrderId>,
}
