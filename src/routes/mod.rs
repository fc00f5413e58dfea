use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use basket_catalog::Catalog;
use basket_shopping::ShoppingStore;

mod catalog;
mod command;
mod health;
mod history;
mod shopping_list;

pub use catalog::{CategorizeJson, SearchJson, SeasonalQuery};
pub use command::{PhraseJson, PhraseResponse};
pub use history::HistoryQuery;
pub use shopping_list::{QuantityJson, ReplaceJson};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub catalog: Arc<Catalog>,
    pub shopping: ShoppingStore,
}

impl AppState {
    /// Fresh state with the built-in catalog and an empty store.
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            catalog: Arc::new(Catalog::default()),
            shopping: ShoppingStore::new(),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/categories", get(catalog::categories))
        .route("/api/categorize", post(catalog::categorize))
        .route("/api/substitutes", get(catalog::substitutes))
        .route("/api/substitutes/{name}", get(catalog::substitutes_for))
        .route("/api/seasonal", get(catalog::seasonal))
        .route("/api/search", post(catalog::search))
        .route(
            "/api/shopping-list/{user_id}",
            get(shopping_list::page).post(shopping_list::replace),
        )
        .route("/api/shopping-list/{user_id}/add", post(shopping_list::add))
        .route(
            "/api/shopping-list/{user_id}/remove",
            post(shopping_list::remove),
        )
        .route(
            "/api/shopping-list/{user_id}/clear",
            post(shopping_list::clear),
        )
        .route(
            "/api/shopping-list/{user_id}/substitutes",
            get(shopping_list::substitutes),
        )
        .route(
            "/api/shopping-list/{user_id}/command",
            post(command::action),
        )
        .route("/api/history/{user_id}", get(history::page))
        .with_state(app_state)
}
