use basket_catalog::substitutes_for;
use serde::Serialize;

use crate::ShoppingListItem;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstituteSuggestion {
    pub base: String,
    pub subs: Vec<String>,
}

/// Pair every list item that has known substitutes with them, in list order.
pub fn suggest_substitutes(items: &[ShoppingListItem]) -> Vec<SubstituteSuggestion> {
    items
        .iter()
        .filter_map(|item| {
            let subs = substitutes_for(&item.name);
            if subs.is_empty() {
                return None;
            }

            Some(SubstituteSuggestion {
                base: item.name.to_owned(),
                subs: subs.iter().map(|s| (*s).to_owned()).collect(),
            })
        })
        .collect()
}
