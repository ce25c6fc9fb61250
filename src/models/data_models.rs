use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u32,
    pub author: String,
    pub rating: f64,
    pub comment: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    Used,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::New => write!(f, "New"),
            Condition::Used => write!(f, "Used"),
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(Condition::New),
            "used" => Ok(Condition::Used),
            other => Err(format!("unknown condition: {}", other)),
        }
    }
}

/// Immutable catalog record, loaded once from seed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Pre-discount price; only present on discounted products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Name of a node in the category taxonomy.
    pub category: String,
    pub images: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub stock: u32,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default)]
    pub is_trending: bool,
    pub brand: String,
    pub condition: Condition,
    pub seller: String,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// A zero original price does not count as a markdown.
    pub fn is_deal(&self) -> bool {
        self.original_price.is_some_and(|original| original > 0.0)
    }

    /// Whole-number discount relative to the original price, if any.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= 0.0 || original <= self.price {
            return None;
        }
        let percent = ((original - self.price) / original * 100.0).round();
        Some(percent as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<Category>,
}

impl Category {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
            subcategories: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, subcategories: Vec<Category>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
            subcategories,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.subcategories.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product: Product,
    pub quantity: u32,
    /// Unit price at the time of purchase.
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub date: NaiveDate,
    pub total: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    pub subject: String,
    pub message: String,
    pub date: NaiveDate,
    pub status: TicketStatus,
}

/// Storefront pages the navigation controller can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Product,
    Cart,
    Checkout,
    Account,
    Category,
    Deals,
    CustomerService,
    Wishlist,
}
