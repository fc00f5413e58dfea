use axum::{
    Json,
    extract::{Path, State},
};
use basket_shared::Quantity;
use basket_shopping::{AddInput, RemoveInput, ShoppingListItem, SubstituteSuggestion};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{error::AppError, routes::AppState};

fn default_qty() -> Quantity {
    1
}

#[derive(Deserialize, Default, Clone)]
pub struct QuantityJson {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_qty")]
    pub qty: Quantity,
}

#[derive(Deserialize, Default, Clone)]
pub struct ReplaceJson {
    #[serde(default)]
    pub items: Vec<ShoppingListItem>,
}

/// GET /api/shopping-list/{user_id}
pub async fn page(
    State(app): State<AppState>,
    Path((user_id,)): Path<(String,)>,
) -> Json<Vec<ShoppingListItem>> {
    Json(app.shopping.get(&user_id).await)
}

/// POST /api/shopping-list/{user_id} - overwrite the whole list
pub async fn replace(
    State(app): State<AppState>,
    Path((user_id,)): Path<(String,)>,
    Json(input): Json<ReplaceJson>,
) -> Json<Value> {
    app.shopping.replace(&user_id, input.items).await;

    Json(json!({ "status": "success" }))
}

pub async fn add(
    State(app): State<AppState>,
    Path((user_id,)): Path<(String,)>,
    Json(input): Json<QuantityJson>,
) -> Result<Json<Value>, AppError> {
    let items = match app
        .shopping
        .add(
            &user_id,
            AddInput {
                name: input.name,
                qty: input.qty,
            },
        )
        .await
    {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(user = user_id, err = %err, "failed to add item");

            return Err(err.into());
        }
    };

    Ok(Json(json!({ "status": "success", "items": items })))
}

pub async fn remove(
    State(app): State<AppState>,
    Path((user_id,)): Path<(String,)>,
    Json(input): Json<QuantityJson>,
) -> Result<Json<Value>, AppError> {
    let items = match app
        .shopping
        .remove(
            &user_id,
            RemoveInput {
                name: input.name,
                qty: input.qty,
            },
        )
        .await
    {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(user = user_id, err = %err, "failed to remove item");

            return Err(err.into());
        }
    };

    Ok(Json(json!({ "status": "success", "items": items })))
}

pub async fn clear(
    State(app): State<AppState>,
    Path((user_id,)): Path<(String,)>,
) -> Json<Value> {
    app.shopping.clear(&user_id).await;

    Json(json!({ "status": "success" }))
}

/// GET /api/shopping-list/{user_id}/substitutes - alternatives for listed items
pub async fn substitutes(
    State(app): State<AppState>,
    Path((user_id,)): Path<(String,)>,
) -> Json<Vec<SubstituteSuggestion>> {
    Json(app.shopping.substitutes(&user_id).await)
}
