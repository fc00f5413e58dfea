use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::routes::AppState;

#[derive(Deserialize, Default, Clone)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// GET /api/history/{user_id} - most frequently added item names
pub async fn page(
    State(app): State<AppState>,
    Path((user_id,)): Path<(String,)>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<String>> {
    let limit = query
        .limit
        .unwrap_or(app.config.history.default_limit);

    Json(app.shopping.history(&user_id, limit).await)
}
