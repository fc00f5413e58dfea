use basket_shared::Quantity;
use validator::Validate;

use crate::ShoppingListItem;

#[derive(Debug, Clone, Validate)]
pub struct AddInput {
    #[validate(length(min = 1, message = "Item name required"))]
    pub name: String,
    #[validate(range(
        min = 1,
        max = 1_000_000,
        message = "Quantity must be between 1 and 1000000"
    ))]
    pub qty: Quantity,
}

impl super::ShoppingStore {
    /// Add `qty` of an item to the user's list and record it in history.
    ///
    /// Returns the user's full list after the change.
    pub async fn add(
        &self,
        user_id: &str,
        input: AddInput,
    ) -> basket_shared::Result<Vec<ShoppingListItem>> {
        let input = AddInput {
            name: input.name.trim().to_owned(),
            ..input
        };
        input.validate()?;

        let basket = self.basket(user_id).await;
        let mut guard = basket.lock().await;
        let basket = &mut *guard;

        let list = basket.list.get_or_insert_default();
        list.add(&input.name, input.qty);
        basket.history.record(&input.name, input.qty);

        tracing::debug!(
            user = user_id,
            name = %input.name,
            qty = input.qty,
            "item added to shopping list"
        );

        Ok(list.items().to_vec())
    }
}
