use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{Catalog, Product};

/// Optional narrowing applied on top of the text query. Every filter that is
/// set must hold for a product to be returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic: Option<bool>,
}

impl SearchFilters {
    fn brand(&self) -> Option<String> {
        self.brand
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_lowercase)
    }

    fn accepts(&self, brand: Option<&str>, product: &Product) -> bool {
        if brand.is_some_and(|b| b != product.brand.to_lowercase()) {
            return false;
        }

        // 0 is a real bound here, not "no limit"; omit the field to skip it
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }

        if self.organic.unwrap_or(false) && !product.is_organic() {
            return false;
        }

        true
    }
}

impl Catalog {
    /// Filter the catalog, preserving catalog order.
    ///
    /// A non-empty query must occur in the product name or its category
    /// label (case-insensitive).
    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<Product> {
        let query = query.to_lowercase();
        let brand = filters.brand();

        self.products()
            .iter()
            .filter(|p| {
                query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.category.to_string().to_lowercase().contains(&query)
            })
            .filter(|p| filters.accepts(brand.as_deref(), p))
            .cloned()
            .collect()
    }
}
