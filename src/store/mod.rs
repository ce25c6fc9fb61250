pub mod account;
pub mod browse;
pub mod cart;
pub mod checkout;
pub mod error;
pub mod navigation;
pub mod support;
pub mod wishlist;

pub use account::Account;
pub use browse::{BrowseSession, QueryTicket};
pub use cart::Cart;
pub use checkout::checkout;
pub use error::StoreError;
pub use navigation::{HistoryEntry, NavigationController, PageData};
pub use support::{FAQS, Faq, search_faqs};
pub use wishlist::Wishlist;

use rand::Rng;

/// Customer-facing reference such as `NXR-48213`: prefix plus five random digits.
pub(crate) fn reference_id(prefix: &str) -> String {
    let number: u32 = rand::thread_rng().gen_range(10000..100000);
    format!("{}-{}", prefix, number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_id_has_five_digits() {
        for _ in 0..1000 {
            let id = reference_id("NXR");
            let digits = id.strip_prefix("NXR-").unwrap();
            assert_eq!(digits.len(), 5);
            let number: u32 = digits.parse().unwrap();
            assert!((10000..100000).contains(&number));
        }
    }
}
