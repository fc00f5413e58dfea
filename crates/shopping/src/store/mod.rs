mod add;
mod remove;
mod replace;

pub use add::*;
pub use remove::*;

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::{History, ShoppingList, ShoppingListItem, SubstituteSuggestion, suggest_substitutes};

/// Everything kept for one user key.
#[derive(Debug, Default)]
struct Basket {
    /// `None` until the user first adds, replaces or clears.
    list: Option<ShoppingList>,
    history: History,
}

/// In-memory shopping lists and purchase history, keyed by user.
///
/// Cloning is cheap and shares the same state. Each user's basket sits
/// behind its own lock, so operations on one user are serialized while
/// different users proceed independently.
#[derive(Clone, Default)]
pub struct ShoppingStore {
    baskets: Arc<Mutex<HashMap<String, Arc<Mutex<Basket>>>>>,
}

impl ShoppingStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn basket(&self, user_id: &str) -> Arc<Mutex<Basket>> {
        let mut baskets = self.baskets.lock().await;

        baskets.entry(user_id.to_owned()).or_default().clone()
    }

    async fn find(&self, user_id: &str) -> Option<Arc<Mutex<Basket>>> {
        self.baskets.lock().await.get(user_id).cloned()
    }

    pub async fn get(&self, user_id: &str) -> Vec<ShoppingListItem> {
        let Some(basket) = self.find(user_id).await else {
            return vec![];
        };

        let basket = basket.lock().await;

        basket
            .list
            .as_ref()
            .map(|list| list.items().to_vec())
            .unwrap_or_default()
    }

    /// The `limit` most frequently added item names for a user.
    pub async fn history(&self, user_id: &str, limit: usize) -> Vec<String> {
        let Some(basket) = self.find(user_id).await else {
            return vec![];
        };

        basket.lock().await.history.top(limit)
    }

    /// Substitute suggestions for whatever is currently on the user's list.
    pub async fn substitutes(&self, user_id: &str) -> Vec<SubstituteSuggestion> {
        suggest_substitutes(&self.get(user_id).await)
    }
}
