use crate::models::Product;

/// Saved products, unique by id, in the order they were saved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the product was already saved.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(product.id) {
            return false;
        }
        self.items.push(product.clone());
        true
    }

    pub fn remove(&mut self, product_id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != product_id);
        self.items.len() != before
    }

    /// Saves or unsaves; returns whether the product is saved afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(product.id) {
            false
        } else {
            self.add(product)
        }
    }

    pub fn contains(&self, product_id: u32) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }
}
