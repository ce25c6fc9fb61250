use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {what} seed: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("order {order_id} references unknown product {product_id}")]
    UnknownProduct { order_id: String, product_id: u32 },
}

/// A product that breaks a data-model invariant. Reported, never rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedIssue {
    #[error("product {id} appears more than once")]
    DuplicateId { id: u32 },

    #[error("product {id} has category '{category}' which is not in the taxonomy")]
    UnknownCategory { id: u32, category: String },

    #[error("product {id} has negative price {price}")]
    NegativePrice { id: u32, price: f64 },

    #[error("product {id} has original price {original} below its price {price}")]
    OriginalBelowPrice { id: u32, price: f64, original: f64 },

    #[error("product {id} has no images")]
    NoImages { id: u32 },

    #[error("product {id} has rating {rating} outside 0-5")]
    RatingOutOfRange { id: u32, rating: f64 },
}
