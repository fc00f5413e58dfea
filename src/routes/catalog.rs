use axum::{
    Json,
    extract::{Path, Query, State},
};
use basket_catalog::{
    CategoryTable, Product, SearchFilters, SubstituteTable, current_month, seasonal_for,
};
use serde::Deserialize;
use serde_json::{Value, json};
use validator::Validate;

use crate::{error::AppError, routes::AppState};

pub async fn categories() -> Json<CategoryTable> {
    Json(CategoryTable)
}

#[derive(Deserialize, Default, Clone)]
pub struct CategorizeJson {
    #[serde(default)]
    pub name: String,
}

pub async fn categorize(Json(input): Json<CategorizeJson>) -> Json<Value> {
    Json(json!({ "category": basket_catalog::categorize(&input.name) }))
}

pub async fn substitutes() -> Json<SubstituteTable> {
    Json(SubstituteTable)
}

pub async fn substitutes_for(Path((name,)): Path<(String,)>) -> Json<&'static [&'static str]> {
    Json(basket_catalog::substitutes_for(&name))
}

#[derive(Deserialize, Default, Clone)]
pub struct SeasonalQuery {
    pub month: Option<u8>,
}

/// GET /api/seasonal - items in season this month, or in `?month=1..12`
pub async fn seasonal(Query(query): Query<SeasonalQuery>) -> Result<Json<Vec<String>>, AppError> {
    let items = match query.month {
        Some(month) => seasonal_for(month)?,
        None => basket_catalog::seasonal(current_month()),
    };

    Ok(Json(items))
}

#[derive(Deserialize, Default, Clone)]
pub struct SearchJson {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: SearchFilters,
}

pub async fn search(
    State(app): State<AppState>,
    Json(input): Json<SearchJson>,
) -> Result<Json<Vec<Product>>, AppError> {
    input.filters.validate()?;

    let results = app.catalog.search(&input.query, &input.filters);

    tracing::debug!(
        query = %input.query,
        results = results.len(),
        "catalog searched"
    );

    Ok(Json(results))
}
