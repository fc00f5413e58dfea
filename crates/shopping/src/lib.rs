mod history;
mod item;
mod list;
pub mod phrase;
mod store;
mod suggestion;

pub use history::History;
pub use item::ShoppingListItem;
pub use list::ShoppingList;
pub use phrase::{parse_phrase, ParsedCommand};
pub use store::*;
pub use suggestion::{suggest_substitutes, SubstituteSuggestion};
