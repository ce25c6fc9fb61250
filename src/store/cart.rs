use tracing::debug;

use crate::models::{CartItem, Product};
use crate::store::error::StoreError;

/// Shopping cart: one line per product id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units, merging into an existing line for the same product.
    ///
    /// The combined quantity may not exceed the product's stock.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), StoreError> {
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity);
        }
        if !product.is_in_stock() {
            return Err(StoreError::OutOfStock { id: product.id });
        }

        let position = self.position(product.id);
        let existing = position.map_or(0, |i| self.items[i].quantity);
        let requested = existing.saturating_add(quantity);
        if requested > product.stock {
            return Err(StoreError::InsufficientStock {
                id: product.id,
                requested,
                available: product.stock,
            });
        }

        match position {
            Some(i) => self.items[i].quantity = requested,
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity,
            }),
        }
        debug!("Cart: product {} now x{}", product.id, requested);
        Ok(())
    }

    /// Returns whether a line was removed.
    pub fn remove(&mut self, product_id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != product_id);
        self.items.len() != before
    }

    /// Sets a line's quantity; zero removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, product_id: u32, quantity: u32) -> Result<(), StoreError> {
        if quantity == 0 {
            self.remove(product_id);
            return Ok(());
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.product.id == product_id) {
            if quantity > item.product.stock {
                return Err(StoreError::InsufficientStock {
                    id: product_id,
                    requested: quantity,
                    available: item.product.stock,
                });
            }
            item.quantity = quantity;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn quantity_of(&self, product_id: u32) -> u32 {
        self.position(product_id).map_or(0, |i| self.items[i].quantity)
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units, not lines.
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, product_id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::index::tests::product;

    #[test]
    fn test_add_merges_existing_line() {
        let mut cart = Cart::new();
        let mat = product(7, "Sports & Outdoors", 39.99);

        cart.add(&mat, 1).unwrap();
        cart.add(&mat, 2).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(7), 3);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_total_and_count() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Laptops", 10.0), 2).unwrap();
        cart.add(&product(2, "Laptops", 2.5), 4).unwrap();

        assert!((cart.total() - 30.0).abs() < 1e-9);
        assert_eq!(cart.count(), 6);
        assert_eq!(cart.items().len(), 2);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Laptops", 10.0), 2).unwrap();

        cart.update_quantity(1, 5).unwrap();
        assert_eq!(cart.quantity_of(1), 5);

        cart.update_quantity(1, 0).unwrap();
        assert!(cart.is_empty());

        // Unknown product: no-op.
        cart.update_quantity(99, 3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_stock_limits() {
        let mut cart = Cart::new();
        let laptop = product(1, "Laptops", 10.0);

        cart.add(&laptop, 8).unwrap();
        let err = cart.add(&laptop, 3).unwrap_err();
        assert_eq!(
            err,
            StoreError::InsufficientStock {
                id: 1,
                requested: 11,
                available: 10
            }
        );
        assert_eq!(cart.quantity_of(1), 8);

        assert!(cart.update_quantity(1, 11).is_err());
        assert_eq!(cart.add(&laptop, 0), Err(StoreError::InvalidQuantity));

        let mut sold_out = product(2, "Laptops", 10.0);
        sold_out.stock = 0;
        assert_eq!(cart.add(&sold_out, 1), Err(StoreError::OutOfStock { id: 2 }));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Laptops", 10.0), 1).unwrap();
        cart.add(&product(2, "Laptops", 10.0), 1).unwrap();

        assert!(cart.remove(1));
        assert!(!cart.remove(1));
        assert_eq!(cart.items()[0].product.id, 2);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
