pub mod category;
pub mod product;
pub mod search;
pub mod seasonal;
pub mod substitute;

pub use category::{categorize, Category, CategoryTable};
pub use product::{Catalog, Product};
pub use search::SearchFilters;
pub use seasonal::{current_month, seasonal, seasonal_for, seasonal_in, SeasonalBlock, SEASONAL};
pub use substitute::{substitutes_for, SubstituteTable};
