pub mod error;
pub mod index;
pub mod seed;

pub use error::{CatalogError, SeedIssue};
pub use index::CatalogIndex;
pub use seed::AccountSeed;
