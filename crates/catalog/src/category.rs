use serde::{Deserialize, Serialize, ser::SerializeMap};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Aisle a grocery item belongs to.
///
/// Variants are declared in evaluation order: [`categorize`] walks
/// [`Category::VARIANTS`] front to back and stops at the first match.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Category {
    Dairy,
    Produce,
    Bakery,
    Beverages,
    Snacks,
    Household,
    #[default]
    Other,
}

impl Category {
    /// Lowercase fragments that place an item in this category when they
    /// occur anywhere in its name. `Other` has none: it is the fallback.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Dairy => &["milk", "cheese", "yogurt", "butter", "ghee"],
            Category::Produce => &[
                "apple", "apples", "banana", "bananas", "tomato", "potato", "onion", "spinach",
                "mango", "orange",
            ],
            Category::Bakery => &["bread", "bun", "buns"],
            Category::Beverages => &["water", "soda", "juice", "tea", "coffee"],
            Category::Snacks => &["chips", "biscuits", "cookies", "namkeen", "chocolate"],
            Category::Household => &["soap", "detergent", "toothpaste", "shampoo", "tissue"],
            Category::Other => &[],
        }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.keywords()
            .iter()
            .any(|keyword| normalized.contains(keyword))
    }
}

/// Categorize a free-text item name.
///
/// The name is lowercased and tested against each category's keywords in
/// declaration order. Names matching nothing (including the empty string)
/// fall back to [`Category::Other`].
pub fn categorize(name: &str) -> Category {
    let normalized = name.to_lowercase();

    Category::VARIANTS
        .iter()
        .find(|category| category.matches(&normalized))
        .copied()
        .unwrap_or_default()
}

/// The whole label to keywords table, serialized as a JSON object whose
/// keys keep declaration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct CategoryTable;

impl Serialize for CategoryTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::VARIANTS.len()))?;
        for category in Category::VARIANTS {
            let label: &str = category.as_ref();
            map.serialize_entry(label, category.keywords())?;
        }
        map.end()
    }
}
