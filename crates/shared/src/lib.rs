mod command;

pub use command::*;

/// Item quantities on a shopping list. Whole units only.
pub type Quantity = i64;

/// Largest quantity a single add or remove may carry.
pub const MAX_QUANTITY: Quantity = 1_000_000;
