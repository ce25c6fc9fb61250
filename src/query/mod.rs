pub mod engine;
pub mod error;
pub mod pagination;
pub mod spec;

pub use engine::{Facets, QueryEngine};
pub use error::QueryError;
pub use pagination::{PageLink, page_window, total_pages};
pub use spec::{ProductFilters, QueryResult, QuerySpec, SortOrder};
