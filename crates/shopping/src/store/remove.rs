use basket_shared::Quantity;
use validator::Validate;

use crate::ShoppingListItem;

#[derive(Debug, Clone, Validate)]
pub struct RemoveInput {
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
    /// Take `qty` of an item off the user's list. History is left as is.
    ///
    /// Fails when the user has never had a list. Removing an item that is not
    /// on the list is not an error.
    pub async fn remove(
        &self,
        user_id: &str,
        input: RemoveInput,
    ) -> basket_shared::Result<Vec<ShoppingListItem>> {
        let input = RemoveInput {
            name: input.name.trim().to_owned(),
            ..input
        };
        input.validate()?;

        let Some(basket) = self.find(user_id).await else {
            basket_shared::user!("No shopping list for user {user_id}");
        };

        let mut basket = basket.lock().await;
        let Some(list) = basket.list.as_mut() else {
            basket_shared::user!("No shopping list for user {user_id}");
        };

        list.remove(&input.name, input.qty);

        tracing::debug!(
            user = user_id,
            name = %input.name,
            qty = input.qty,
            "item removed from shopping list"
        );

        Ok(list.items().to_vec())
    }
}
