//! Size → price lookup.
//!
//! Prices are fixed per cup size and expressed in the reference currency unit
//! (see `ClientConfig::currency`). The drink itself does not affect the price.

use crate::model::CoffeeSize;

/// The complete price table, one row per size.
pub const SIZE_PRICES: [(CoffeeSize, f64); 3] = [
    (CoffeeSize::Small, 50.00),
    (CoffeeSize::Medium, 75.00),
    (CoffeeSize::Large, 100.00),
];

/// Price of a cup of the given size.
pub fn price_for(size: CoffeeSize) -> f64 {
    SIZE_PRICES
        .iter()
        .find(|(row, _)| *row == size)
        .map(|(_, price)| *price)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_per_size() {
        assert_eq!(price_for(CoffeeSize::Small), 50.00);
        assert_eq!(price_for(CoffeeSize::Medium), 75.00);
        assert_eq!(price_for(CoffeeSize::Large), 100.00);
    }

    #[test]
    fn test_table_covers_every_size() {
        for size in CoffeeSize::ALL {
            assert!(SIZE_PRICES.iter().any(|(row, _)| *row == size), "{}", size);
        }
    }
}
