use basket_shared::Quantity;
use serde::{Deserialize, Serialize};

use crate::ShoppingListItem;

/// A user's ordered shopping list.
///
/// `add` and `remove` keep at most one entry per case-insensitive name.
/// `replace` takes the caller's items as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new(items: Vec<ShoppingListItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn find(&self, name: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.is_named(name))
    }

    /// Merge `qty` into the entry named `name`, or append a new categorized
    /// entry. The first-entered casing is kept on merge.
    pub fn add(&mut self, name: &str, qty: Quantity) {
        match self.items.iter_mut().find(|item| item.is_named(name)) {
            Some(item) => item.qty = item.qty.saturating_add(qty),
            None => self.items.push(ShoppingListItem::new(name, qty)),
        }
    }

    /// Take `qty` off the entry named `name`, dropping it once nothing is
    /// left. Unknown names are ignored.
    pub fn remove(&mut self, name: &str, qty: Quantity) {
        let Some(pos) = self.items.iter().position(|item| item.is_named(name)) else {
            return;
        };

        let item = &mut self.items[pos];
        item.qty = item.qty.saturating_sub(qty);
        if item.qty <= 0 {
            self.items.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
