use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::catalog::error::CatalogError;
use crate::catalog::index::CatalogIndex;
use crate::models::{Category, Order, OrderItem, OrderStatus, Product, SupportTicket, User};

const CATALOG_SEED: &str = include_str!("../seed/catalog.json");
const ACCOUNT_SEED: &str = include_str!("../seed/account.json");

#[derive(Debug, Deserialize)]
struct CatalogSeed {
    categories: Vec<Category>,
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderItemSeed {
    product_id: u32,
    quantity: u32,
    price: f64,
}

#[derive(Debug, Deserialize)]
struct OrderSeed {
    id: String,
    date: chrono::NaiveDate,
    total: f64,
    status: OrderStatus,
    items: Vec<OrderItemSeed>,
}

#[derive(Debug, Deserialize)]
struct AccountSeedFile {
    user: User,
    orders: Vec<OrderSeed>,
    tickets: Vec<SupportTicket>,
}

/// Demo account data with order lines resolved against the catalog.
#[derive(Debug, Clone)]
pub struct AccountSeed {
    pub user: User,
    pub orders: Vec<Order>,
    pub tickets: Vec<SupportTicket>,
}

pub fn parse_catalog(json: &str) -> Result<CatalogIndex, CatalogError> {
    let seed: CatalogSeed = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        what: "catalog",
        source,
    })?;
    Ok(CatalogIndex::new(seed.categories, seed.products))
}

/// The storefront catalog compiled into the binary.
pub fn load_embedded() -> Result<CatalogIndex, CatalogError> {
    parse_catalog(CATALOG_SEED)
}

pub fn load_from_file(path: &str) -> Result<CatalogIndex> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog seed file: {}", path))?;

    let index = parse_catalog(&content)
        .with_context(|| format!("Failed to load catalog seed file: {}", path))?;

    info!("Loaded catalog seed from {}", path);
    Ok(index)
}

pub fn parse_account(json: &str, index: &CatalogIndex) -> Result<AccountSeed, CatalogError> {
    let seed: AccountSeedFile = serde_json::from_str(json).map_err(|source| CatalogError::Parse {
        what: "account",
        source,
    })?;

    let orders = seed
        .orders
        .into_iter()
        .map(|order| -> Result<Order, CatalogError> {
            let items = order
                .items
                .iter()
                .map(|item| -> Result<OrderItem, CatalogError> {
                    let product = index.product_by_id(item.product_id).ok_or_else(|| {
                        CatalogError::UnknownProduct {
                            order_id: order.id.clone(),
                            product_id: item.product_id,
                        }
                    })?;
                    Ok(OrderItem {
                        product: product.clone(),
                        quantity: item.quantity,
                        price: item.price,
                    })
                })
                .collect::<Result<Vec<_>, CatalogError>>()?;

            Ok(Order {
                id: order.id,
                date: order.date,
                total: order.total,
                status: order.status,
                items,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    Ok(AccountSeed {
        user: seed.user,
        orders,
        tickets: seed.tickets,
    })
}

pub fn load_account(index: &CatalogIndex) -> Result<AccountSeed, CatalogError> {
    parse_account(ACCOUNT_SEED, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::error::SeedIssue;

    #[test]
    fn test_embedded_catalog_loads() {
        let index = load_embedded().unwrap();
        assert_eq!(index.products().len(), 52);
        assert_eq!(index.categories().len(), 4);

        let ids: Vec<u32> = index.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=52).collect::<Vec<_>>());
    }

    #[test]
    fn test_embedded_catalog_seed_issues() {
        let index = load_embedded().unwrap();

        // Three seed products point at categories the taxonomy never defined.
        let unknown: Vec<String> = index
            .validate()
            .into_iter()
            .filter_map(|issue| match issue {
                SeedIssue::UnknownCategory { category, .. } => Some(category),
                _ => None,
            })
            .collect();
        assert_eq!(
            unknown,
            vec!["Toys & Games", "Sports & Outdoors", "Sports & Outdoors"]
        );
    }

    #[test]
    fn test_account_seed_resolves_products() {
        let index = load_embedded().unwrap();
        let account = load_account(&index).unwrap();

        assert_eq!(account.user.name, "Jessica Jones");
        assert_eq!(account.orders.len(), 2);
        assert_eq!(account.orders[0].items[0].product.name, "Quantum Wireless Headphones");
        assert_eq!(account.orders[1].items[1].quantity, 2);
        assert_eq!(account.tickets.len(), 2);
    }

    #[test]
    fn test_account_seed_unknown_product() {
        let index = parse_catalog(r#"{ "categories": [], "products": [] }"#).unwrap();
        let err = load_account(&index).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownProduct { product_id: 1, .. }));
    }

    #[test]
    fn test_malformed_catalog() {
        let err = parse_catalog("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse catalog seed"));
    }
}
