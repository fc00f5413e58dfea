use axum::{
    Json,
    extract::{Path, State},
};
use basket_catalog::Product;
use basket_shopping::{AddInput, ParsedCommand, RemoveInput, ShoppingListItem, parse_phrase};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, routes::AppState};

#[derive(Deserialize, Default, Clone)]
pub struct PhraseJson {
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize, Debug)]
pub struct PhraseResponse {
    pub command: ParsedCommand,
    /// The user's list after an add, remove or clear.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ShoppingListItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Product>>,
}

/// POST /api/shopping-list/{user_id}/command - run a free-text command
pub async fn action(
    State(app): State<AppState>,
    Path((user_id,)): Path<(String,)>,
    Json(input): Json<PhraseJson>,
) -> Result<Json<PhraseResponse>, AppError> {
    let Some(command) = parse_phrase(&input.text) else {
        return Err(AppError::ValidationError(
            "Command text required".to_string(),
        ));
    };

    let mut response = PhraseResponse {
        command: command.clone(),
        items: None,
        results: None,
    };

    match command {
        ParsedCommand::Add { item, qty } => {
            let items = app
                .shopping
                .add(&user_id, AddInput { name: item, qty })
                .await?;
            response.items = Some(items);
        }
        ParsedCommand::Remove { item, qty } => {
            let items = app
                .shopping
                .remove(&user_id, RemoveInput { name: item, qty })
                .await?;
            response.items = Some(items);
        }
        ParsedCommand::Clear => {
            app.shopping.clear(&user_id).await;
            response.items = Some(vec![]);
        }
        ParsedCommand::Search { query, filters } => {
            response.results = Some(app.catalog.search(&query, &filters));
        }
        ParsedCommand::SetLanguage { .. } | ParsedCommand::Unknown { .. } => {}
    }

    tracing::debug!(user = user_id, command = ?response.command, "command executed");

    Ok(Json(response))
}
