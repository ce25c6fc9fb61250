use thiserror::Error;

/// Misuse of the shopper-facing state holders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("product {id} is out of stock")]
    OutOfStock { id: u32 },

    #[error("product {id}: requested {requested}, only {available} in stock")]
    InsufficientStock {
        id: u32,
        requested: u32,
        available: u32,
    },

    #[error("cannot check out an empty cart")]
    EmptyCart,

    #[error("no user is signed in")]
    NotSignedIn,

    #[error("support ticket {field} must not be blank")]
    InvalidTicket { field: &'static str },
}
