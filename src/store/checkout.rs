use chrono::Utc;
use tracing::{info, warn};

use crate::models::{Order, OrderItem, OrderStatus};
use crate::store::account::Account;
use crate::store::cart::Cart;
use crate::store::error::StoreError;
use crate::store::reference_id;

/// Places an order for everything in the cart and empties it.
///
/// The order is recorded on the account only when someone is signed in.
pub fn checkout(cart: &mut Cart, account: Option<&mut Account>) -> Result<Order, StoreError> {
    if cart.is_empty() {
        warn!("Checkout attempted with an empty cart");
        return Err(StoreError::EmptyCart);
    }

    let items = cart
        .items()
        .iter()
        .map(|line| OrderItem {
            product: line.product.clone(),
            quantity: line.quantity,
            price: line.product.price,
        })
        .collect();

    let order = Order {
        id: reference_id("NXR"),
        date: Utc::now().date_naive(),
        total: cart.total(),
        status: OrderStatus::Processing,
        items,
    };
    info!(
        "Placed order {}: {} units, {:.2}",
        order.id,
        cart.count(),
        order.total
    );

    if let Some(account) = account.filter(|account| account.is_signed_in()) {
        account.record_order(order.clone());
    }
    cart.clear();

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::index::tests::product;
    use crate::catalog::seed;

    #[test]
    fn test_checkout_empty_cart() {
        let mut cart = Cart::new();
        assert_eq!(checkout(&mut cart, None), Err(StoreError::EmptyCart));
    }

    #[test]
    fn test_checkout_builds_order_and_clears_cart() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Laptops", 10.0), 2).unwrap();
        cart.add(&product(2, "Laptops", 5.0), 1).unwrap();

        let order = checkout(&mut cart, None).unwrap();

        assert!(order.id.starts_with("NXR-"));
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].price, 10.0);
        assert!((order.total - 25.0).abs() < 1e-9);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_records_on_signed_in_account() {
        let index = seed::load_embedded().unwrap();
        let mut account = Account::from_seed(seed::load_account(&index).unwrap());
        let mut cart = Cart::new();
        cart.add(&product(1, "Laptops", 10.0), 1).unwrap();

        // Guest checkout leaves the order history alone.
        checkout(&mut cart, Some(&mut account)).unwrap();
        assert_eq!(account.orders().len(), 2);

        account.sign_in();
        cart.add(&product(1, "Laptops", 10.0), 1).unwrap();
        let order = checkout(&mut cart, Some(&mut account)).unwrap();
        assert_eq!(account.orders().len(), 3);
        assert_eq!(account.orders()[0].id, order.id);
    }
}
