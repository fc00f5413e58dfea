use crate::{ShoppingList, ShoppingListItem};

impl super::ShoppingStore {
    /// Overwrite the user's list wholesale. Entries are stored as given.
    pub async fn replace(&self, user_id: &str, items: Vec<ShoppingListItem>) {
        let basket = self.basket(user_id).await;
        let count = items.len();

        basket.lock().await.list = Some(ShoppingList::new(items));

        tracing::debug!(user = user_id, count, "shopping list replaced");
    }

    pub async fn clear(&self, user_id: &str) {
        let basket = self.basket(user_id).await;
        let mut basket = basket.lock().await;

        basket.list.get_or_insert_default().clear();

        tracing::debug!(user = user_id, "shopping list cleared");
    }
}
