//! Pure data structures: the [`Order`] resource, its menu enums, and the price table.

pub mod format;
pub mod order;
pub mod pricing;

pub use format::*;
pub use order::*;
pub use pricing::*;
