use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub unit: String,
    pub tags: BTreeSet<String>,
    pub category: Category,
}

impl Product {
    fn new(
        name: &str,
        brand: &str,
        price: f64,
        unit: &str,
        tags: &[&str],
        category: Category,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            brand: brand.to_owned(),
            price,
            unit: unit.to_owned(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            category,
        }
    }

    pub fn is_organic(&self) -> bool {
        self.tags.contains("organic") || self.name.to_lowercase().contains("organic")
    }
}

/// Read-only product catalog, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Product::new("Apples", "FarmFresh", 3.5, "kg", &["organic"], Category::Produce),
            Product::new("Apples", "Daily", 2.8, "kg", &[], Category::Produce),
            Product::new("Milk", "Amul", 1.0, "500ml", &[], Category::Dairy),
            Product::new("Almond Milk", "Silk", 2.2, "1L", &["vegan"], Category::Dairy),
            Product::new("Bread", "Britannia", 0.9, "400g", &["whole wheat"], Category::Bakery),
            Product::new("Toothpaste", "Colgate", 1.5, "100g", &[], Category::Household),
            Product::new("Bananas", "FarmFresh", 1.2, "dozen", &[], Category::Produce),
            Product::new("Organic Apples", "Nature's", 4.2, "kg", &["organic"], Category::Produce),
        ])
    }
}
