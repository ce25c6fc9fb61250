use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::models::{Condition, Product};

/// Default page size used when a caller does not pick one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Seed order.
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortOrder::Default),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

/// Attribute filters. Every populated field narrows the result; an empty set
/// or a missing / non-positive price bound constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilters {
    pub brands: BTreeSet<String>,
    pub conditions: BTreeSet<Condition>,
    pub sellers: BTreeSet<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilters {
    pub fn matches(&self, product: &Product) -> bool {
        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }
        if !self.conditions.is_empty() && !self.conditions.contains(&product.condition) {
            return false;
        }
        if !self.sellers.is_empty() && !self.sellers.contains(&product.seller) {
            return false;
        }
        // Zero doubles as "unset" for both bounds.
        if let Some(min) = self.min_price.filter(|min| *min > 0.0) {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price.filter(|max| *max > 0.0) {
            if product.price > max {
                return false;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
            && self.conditions.is_empty()
            && self.sellers.is_empty()
            && self.min_price.filter(|v| *v > 0.0).is_none()
            && self.max_price.filter(|v| *v > 0.0).is_none()
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.insert(condition);
        self
    }

    pub fn with_seller(mut self, seller: impl Into<String>) -> Self {
        self.sellers.insert(seller.into());
        self
    }

    pub fn with_price_range(mut self, min_price: Option<f64>, max_price: Option<f64>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }
}

/// One catalog query: what to match, how to order it, which page to return.
///
/// `page` and `page_size` are signed because they arrive straight from user
/// input; the engine normalizes a page below 1 and rejects a negative size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuerySpec {
    pub category: Option<String>,
    pub search_term: Option<String>,
    pub filters: Option<ProductFilters>,
    pub sort: SortOrder,
    pub page: i64,
    pub page_size: i64,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            category: None,
            search_term: None,
            filters: None,
            sort: SortOrder::Default,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_filters(mut self, filters: ProductFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub items: Vec<Product>,
    /// Matches before pagination.
    pub total: usize,
}

impl QueryResult {
    /// Nothing matched at all. A page past the end has no items but still
    /// reports its matches.
    pub fn has_no_matches(&self) -> bool {
        self.total == 0
    }
}
