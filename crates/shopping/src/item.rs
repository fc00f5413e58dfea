use basket_catalog::{categorize, Category};
use basket_shared::Quantity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    #[serde(default = "new_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "one")]
    pub qty: Quantity,
    /// Assigned when the item is first added and never recomputed.
    #[serde(default)]
    pub category: Category,
}

impl ShoppingListItem {
    pub fn new(name: impl Into<String>, qty: Quantity) -> Self {
        let name = name.into();
        let category = categorize(&name);

        Self {
            id: new_id(),
            name,
            qty,
            category,
        }
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn one() -> Quantity {
    1
}
