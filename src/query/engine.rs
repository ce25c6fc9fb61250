use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::CatalogIndex;
use crate::models::{Category, Condition, Product};
use crate::query::error::QueryError;
use crate::query::spec::{QueryResult, QuerySpec, SortOrder};

/// Number of related products shown next to a product.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Filter values available for a product listing, each sorted and unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub brands: Vec<String>,
    pub conditions: Vec<Condition>,
    pub sellers: Vec<String>,
}

impl Facets {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let mut brands = BTreeSet::new();
        let mut conditions = BTreeSet::new();
        let mut sellers = BTreeSet::new();

        for product in products {
            brands.insert(product.brand.clone());
            conditions.insert(product.condition);
            sellers.insert(product.seller.clone());
        }

        Self {
            brands: brands.into_iter().collect(),
            conditions: conditions.into_iter().collect(),
            sellers: sellers.into_iter().collect(),
        }
    }
}

/// Pure filter / sort / paginate pipeline over a catalog snapshot.
///
/// Every call is computed from the same immutable index, so the engine can be
/// shared freely and queried from any number of tasks.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: Arc<CatalogIndex>,
    related_limit: usize,
}

impl QueryEngine {
    pub fn new(index: Arc<CatalogIndex>) -> Self {
        Self {
            index,
            related_limit: DEFAULT_RELATED_LIMIT,
        }
    }

    pub fn with_related_limit(mut self, limit: usize) -> Self {
        self.related_limit = limit;
        self
    }

    pub fn index(&self) -> &CatalogIndex {
        &self.index
    }

    pub fn query(&self, spec: &QuerySpec) -> Result<QueryResult, QueryError> {
        let page_size = usize::try_from(spec.page_size).map_err(|_| QueryError::InvalidArgument {
            name: "page_size",
            reason: format!("must not be negative, got {}", spec.page_size),
        })?;
        // Pages below 1 read as the first page.
        let page = usize::try_from(spec.page.max(1)).unwrap_or(usize::MAX);

        let mut matched = self.matching(spec);
        let total = matched.len();

        sort_products(&mut matched, spec.sort);

        let start = (page - 1).saturating_mul(page_size);
        let items: Vec<Product> = matched
            .into_iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect();

        debug!(
            "Query category={:?} search={:?} sort={:?} page={} size={} -> {} of {}",
            spec.category,
            spec.search_term,
            spec.sort,
            page,
            page_size,
            items.len(),
            total
        );

        Ok(QueryResult { items, total })
    }

    /// Products passing the category, text and attribute predicates, in seed order.
    pub fn matching(&self, spec: &QuerySpec) -> Vec<&Product> {
        let closure: Option<HashSet<&str>> = spec
            .category
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| self.index.resolve_category_closure(name));

        let term = spec
            .search_term
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        self.index
            .products()
            .iter()
            .filter(|p| {
                closure
                    .as_ref()
                    .is_none_or(|names| names.contains(p.category.as_str()))
            })
            .filter(|p| {
                term.as_deref()
                    .is_none_or(|term| p.name.to_lowercase().contains(term))
            })
            .filter(|p| spec.filters.as_ref().is_none_or(|f| f.matches(p)))
            .collect()
    }

    pub fn product_by_id(&self, id: u32) -> Option<Product> {
        self.index.product_by_id(id).cloned()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.index.categories().to_vec()
    }

    /// Same exact category, excluding the product itself. No subtree expansion.
    pub fn related(&self, product_id: u32, category: &str) -> Vec<Product> {
        self.index
            .products()
            .iter()
            .filter(|p| p.category == category && p.id != product_id)
            .take(self.related_limit)
            .cloned()
            .collect()
    }

    pub fn bestsellers(&self) -> Vec<Product> {
        self.select(|p| p.is_bestseller)
    }

    pub fn trending(&self) -> Vec<Product> {
        self.select(|p| p.is_trending)
    }

    pub fn deals(&self) -> Vec<Product> {
        self.select(Product::is_deal)
    }

    /// Filter values for the full listing of a category (or the whole catalog).
    pub fn facets(&self, category: Option<&str>) -> Facets {
        let spec = QuerySpec {
            category: category.map(str::to_string),
            ..QuerySpec::default()
        };
        Facets::from_products(self.matching(&spec))
    }

    fn select(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.index
            .products()
            .iter()
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

/// Stable in-place sort; equal prices keep their seed order.
pub fn sort_products(products: &mut [&Product], order: SortOrder) {
    match order {
        SortOrder::Default => {}
        SortOrder::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}
