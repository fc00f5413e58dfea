use basket_shared::Quantity;
use basket_shopping::{AddInput, RemoveInput, ShoppingListItem, ShoppingStore};

#[allow(dead_code)]
pub async fn add(
    store: &ShoppingStore,
    user_id: &str,
    name: &str,
    qty: Quantity,
) -> basket_shared::Result<Vec<ShoppingListItem>> {
    store
        .add(
            user_id,
            AddInput {
                name: name.to_owned(),
                qty,
            },
        )
        .await
}

#[allow(dead_code)]
pub async fn remove(
    store: &ShoppingStore,
    user_id: &str,
    name: &str,
    qty: Quantity,
) -> basket_shared::Result<Vec<ShoppingListItem>> {
    store
        .remove(
            user_id,
            RemoveInput {
                name: name.to_owned(),
                qty,
            },
        )
        .await
}
