//! # Order
//!
//! One placed coffee order.
//!
//! # Wire Format
//! On the wire the order is a JSON object with snake_case keys:
//!
//! ```json
//! {"id": 7, "name": "Martin", "coffee_name": "Latté", "total": "75.00",
//!  "size": "Medium", "created_at": "2025-12-13T09:00:00Z"}
//! ```
//!
//! - `id` is omitted for drafts and assigned by the server on create.
//! - `total` is a decimal carried as a string; see [`total_codec`].
//! - `created_at` is opaque, set by the server, sent back empty on create.
//!
//! # Resource
//! This struct implements [`RestResource`](rest_framework::RestResource); see
//! [`crate::order_resource`] for its endpoint paths.

use crate::model::price_for;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Server-assigned identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The drinks on the menu. Carries no price of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoffeeName {
    #[default]
    Espresso,
    #[serde(rename = "Latté")]
    Latte,
    Cappuccino,
    #[serde(rename = "Flat White")]
    FlatWhite,
}

impl CoffeeName {
    pub const ALL: [CoffeeName; 4] = [
        CoffeeName::Espresso,
        CoffeeName::Latte,
        CoffeeName::Cappuccino,
        CoffeeName::FlatWhite,
    ];

    /// The wire and display tag.
    pub fn as_str(self) -> &'static str {
        match self {
            CoffeeName::Espresso => "Espresso",
            CoffeeName::Latte => "Latté",
            CoffeeName::Cappuccino => "Cappuccino",
            CoffeeName::FlatWhite => "Flat White",
        }
    }

    /// Parses a tag, also accepting the unaccented `Latte`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Latte" => Some(CoffeeName::Latte),
            _ => Self::ALL.into_iter().find(|name| name.as_str() == tag),
        }
    }
}

impl Display for CoffeeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cup sizes. The price of each size lives in [`SIZE_PRICES`](crate::model::SIZE_PRICES).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoffeeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CoffeeSize {
    pub const ALL: [CoffeeSize; 3] = [CoffeeSize::Small, CoffeeSize::Medium, CoffeeSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            CoffeeSize::Small => "Small",
            CoffeeSize::Medium => "Medium",
            CoffeeSize::Large => "Large",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.as_str() == tag)
    }
}

impl Display for CoffeeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    pub name: String,
    pub coffee_name: CoffeeName,
    #[serde(with = "total_codec")]
    pub total: f64,
    pub size: CoffeeSize,
    pub created_at: String,
}

impl Order {
    /// Creates an Order value.
    ///
    /// # Arguments
    /// * `id` - `None` for a draft, the server id otherwise
    /// * `name` - Customer name shown on the cup
    /// * `coffee_name` - Drink
    /// * `total` - Price at time of order
    /// * `size` - Cup size
    /// * `created_at` - Server timestamp, empty for drafts
    pub fn new(
        id: Option<OrderId>,
        name: impl Into<String>,
        coffee_name: CoffeeName,
        total: f64,
        size: CoffeeSize,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            coffee_name,
            total,
            size,
            created_at: created_at.into(),
        }
    }

    /// A draft priced from its size, ready to be posted.
    pub fn draft(name: impl Into<String>, coffee_name: CoffeeName, size: CoffeeSize) -> Self {
        Self::new(None, name, coffee_name, price_for(size), size, "")
    }

    /// `"Latté (Large)"`, as shown in list rows.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.coffee_name, self.size)
    }
}

/// Serde adapter for `total`.
///
/// Inbound accepts a JSON string (parsed as `f64`, `0.0` when unparsable) or a JSON
/// number. Outbound always writes a two-decimal string, so the value round-trips through
/// a decimal-as-string backend unchanged.
pub mod total_codec {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(total: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.2}", total))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(TotalVisitor)
    }

    /// Lenient parse used for string-encoded totals. The string must be a bare number;
    /// anything else, surrounding whitespace included, reads as `0.0`.
    pub fn parse_total(raw: &str) -> f64 {
        raw.parse::<f64>().unwrap_or(0.0)
    }

    struct TotalVisitor;

    impl<'de> Visitor<'de> for TotalVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a decimal string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            Ok(parse_total(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_list_maps_fields() {
        let body = r#"[
            {"id": 1, "name": "Martin", "coffee_name": "Espresso", "total": "50.00",
             "size": "Small", "created_at": "2025-12-13T09:00:00Z"},
            {"id": 2, "name": "Jana", "coffee_name": "Latté", "total": "75.00",
             "size": "Medium", "created_at": "2025-12-13T09:05:00Z"},
            {"id": 3, "name": "Petr", "coffee_name": "Flat White", "total": "100.00",
             "size": "Large", "created_at": "2025-12-13T09:10:00Z"}
        ]"#;

        let orders: Vec<Order> = serde_json::from_str(body).unwrap();

        assert_eq!(orders.len(), 3);
        assert_eq!(orders[1].id, Some(OrderId(2)));
        assert_eq!(orders[1].name, "Jana");
        assert_eq!(orders[1].coffee_name, CoffeeName::Latte);
        assert_eq!(orders[1].total, 75.0);
        assert_eq!(orders[1].size, CoffeeSize::Medium);
        assert_eq!(orders[1].created_at, "2025-12-13T09:05:00Z");
        assert_eq!(orders[2].coffee_name, CoffeeName::FlatWhite);
    }

    #[test]
    fn test_non_numeric_total_defaults_to_zero() {
        let body = json!({
            "id": 4, "name": "Eva", "coffee_name": "Cappuccino", "total": "n/a",
            "size": "Large", "created_at": ""
        });

        let order: Order = serde_json::from_value(body).unwrap();
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn test_padded_total_defaults_to_zero() {
        assert_eq!(total_codec::parse_total("75.00"), 75.0);
        assert_eq!(total_codec::parse_total(" 75.00 "), 0.0);
        assert_eq!(total_codec::parse_total(""), 0.0);

        let body = json!({
            "id": 6, "name": "Eva", "coffee_name": "Espresso", "total": " 75.00 ",
            "size": "Medium", "created_at": ""
        });
        let order: Order = serde_json::from_value(body).unwrap();
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn test_numeric_total_is_accepted() {
        let body = json!({
            "id": 5, "name": "Eva", "coffee_name": "Espresso", "total": 50,
            "size": "Small", "created_at": ""
        });

        let order: Order = serde_json::from_value(body).unwrap();
        assert_eq!(order.total, 50.0);
    }

    #[test]
    fn test_missing_id_decodes_as_draft() {
        let body = json!({
            "name": "Eva", "coffee_name": "Espresso", "total": "50.00",
            "size": "Small", "created_at": ""
        });

        let order: Order = serde_json::from_value(body).unwrap();
        assert_eq!(order.id, None);
    }

    #[test]
    fn test_unknown_tags_fail_decoding() {
        let bad_coffee = json!({
            "id": 1, "name": "Eva", "coffee_name": "Mocha", "total": "50.00",
            "size": "Small", "created_at": ""
        });
        let bad_size = json!({
            "id": 1, "name": "Eva", "coffee_name": "Espresso", "total": "50.00",
            "size": "Huge", "created_at": ""
        });

        assert!(serde_json::from_value::<Order>(bad_coffee).is_err());
        assert!(serde_json::from_value::<Order>(bad_size).is_err());
    }

    #[test]
    fn test_encode_uses_snake_case_and_omits_missing_id() {
        let draft = Order::draft("Martin", CoffeeName::Latte, CoffeeSize::Large);

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Martin", "coffee_name": "Latté", "total": "100.00",
                "size": "Large", "created_at": ""
            })
        );
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let order = Order::new(
            Some(OrderId(12)),
            "Martin",
            CoffeeName::Cappuccino,
            75.0,
            CoffeeSize::Medium,
            "2025-12-13T09:00:00Z",
        );

        let encoded = serde_json::to_string(&order).unwrap();
        let decoded: Order = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, order);
    }

    #[test]
    fn test_tags_parse() {
        assert_eq!(CoffeeName::from_tag("Latte"), Some(CoffeeName::Latte));
        assert_eq!(CoffeeName::from_tag("Flat White"), Some(CoffeeName::FlatWhite));
        assert_eq!(CoffeeName::from_tag("Mocha"), None);
        assert_eq!(CoffeeSize::from_tag("Large"), Some(CoffeeSize::Large));
        assert_eq!(CoffeeSize::from_tag("large"), None);
    }

    #[test]
    fn test_summary() {
        let order = Order::draft("Jana", CoffeeName::Latte, CoffeeSize::Small);
        assert_eq!(order.summary(), "Latté (Small)");
    }
}
