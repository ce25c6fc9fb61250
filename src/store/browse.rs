use tracing::debug;

use crate::config::StoreConfig;
use crate::query::{ProductFilters, QueryResult, QuerySpec, SortOrder};

/// Generation token handed out with every issued query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QueryTicket(u64);

/// Filter, sort and page state of one category listing.
///
/// Changing the category resets filters, sort and page. Changing the search
/// term, filters or sort goes back to page 1. Only the result of the most
/// recently issued query is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseSession {
    category: Option<String>,
    search_term: Option<String>,
    filters: ProductFilters,
    sort: SortOrder,
    page: i64,
    page_size: i64,
    generation: u64,
}

impl BrowseSession {
    pub fn new(page_size: usize) -> Self {
        BrowseSession {
            category: None,
            search_term: None,
            filters: ProductFilters::default(),
            sort: SortOrder::Default,
            page: 1,
            page_size: i64::try_from(page_size).unwrap_or(i64::MAX),
            generation: 0,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.catalog.page_size)
    }

    /// An empty name clears the category.
    pub fn set_category(&mut self, category: Option<String>) {
        let category = category.filter(|name| !name.is_empty());
        if self.category == category {
            return;
        }
        self.category = category;
        self.filters = ProductFilters::default();
        self.sort = SortOrder::Default;
        self.page = 1;
    }

    pub fn set_search_term(&mut self, term: Option<String>) {
        self.search_term = term.filter(|t| !t.is_empty());
        self.page = 1;
    }

    pub fn set_filters(&mut self, filters: ProductFilters) {
        self.filters = filters;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: i64) {
        self.page = page.max(1);
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// The query for the current state.
    pub fn spec(&self) -> QuerySpec {
        let mut spec = QuerySpec::new()
            .with_sort(self.sort)
            .with_page(self.page)
            .with_page_size(self.page_size);
        if let Some(category) = &self.category {
            spec = spec.with_category(category.clone());
        }
        if let Some(term) = &self.search_term {
            spec = spec.with_search_term(term.clone());
        }
        if !self.filters.is_empty() {
            spec = spec.with_filters(self.filters.clone());
        }
        spec
    }

    /// Starts a new query, superseding every earlier ticket.
    pub fn issue(&mut self) -> (QueryTicket, QuerySpec) {
        self.generation += 1;
        debug!("Browse query #{} issued", self.generation);
        (QueryTicket(self.generation), self.spec())
    }

    /// Hands back the result only if its ticket is still the latest.
    pub fn accept(&self, ticket: QueryTicket, result: QueryResult) -> Option<QueryResult> {
        if ticket.0 == self.generation {
            Some(result)
        } else {
            debug!(
                "Discarding stale browse result #{} (latest #{})",
                ticket.0, self.generation
            );
            None
        }
    }

    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        ticket.0 == self.generation
    }
}
