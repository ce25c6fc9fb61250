use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::models::{Category, Product};
use crate::query::{QueryEngine, QueryError, QueryResult, QuerySpec};

/// Asynchronous data-access boundary in front of the catalog.
///
/// Callers await every fetch. Nothing is cancelled: a caller that no longer
/// wants an in-flight result discards it when it arrives.
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_products(&self, spec: &QuerySpec) -> Result<QueryResult, QueryError>;

    async fn fetch_product_by_id(&self, id: u32) -> Option<Product>;

    async fn fetch_categories(&self) -> Vec<Category>;

    async fn fetch_bestsellers(&self) -> Vec<Product>;

    async fn fetch_trending(&self) -> Vec<Product>;

    async fn fetch_related(&self, product_id: u32, category: &str) -> Vec<Product>;

    async fn fetch_deals(&self) -> Vec<Product>;
}

/// Serves the in-memory catalog after a fixed artificial delay.
#[derive(Debug, Clone)]
pub struct SimulatedFetcher {
    engine: Arc<QueryEngine>,
    latency: Duration,
}

impl SimulatedFetcher {
    pub fn new(engine: Arc<QueryEngine>, latency: Duration) -> Self {
        SimulatedFetcher { engine, latency }
    }

    pub fn from_config(engine: Arc<QueryEngine>, config: &StoreConfig) -> Self {
        info!(
            "Simulated catalog fetcher with {}ms latency",
            config.latency.fetch_ms
        );
        Self::new(engine, config.fetch_latency())
    }

    /// Zero latency: every fetch resolves on its first poll.
    pub fn immediate(engine: Arc<QueryEngine>) -> Self {
        Self::new(engine, Duration::ZERO)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn delay(&self, what: &str) {
        debug!("Fetching {} ({}ms)", what, self.latency.as_millis());
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl CatalogFetcher for SimulatedFetcher {
    async fn fetch_products(&self, spec: &QuerySpec) -> Result<QueryResult, QueryError> {
        self.delay("products").await;
        self.engine.query(spec)
    }

    async fn fetch_product_by_id(&self, id: u32) -> Option<Product> {
        self.delay("product").await;
        self.engine.product_by_id(id)
    }

    async fn fetch_categories(&self) -> Vec<Category> {
        self.delay("categories").await;
        self.engine.categories()
    }

    async fn fetch_bestsellers(&self) -> Vec<Product> {
        self.delay("bestsellers").await;
        self.engine.bestsellers()
    }

    async fn fetch_trending(&self) -> Vec<Product> {
        self.delay("trending products").await;
        self.engine.trending()
    }

    async fn fetch_related(&self, product_id: u32, category: &str) -> Vec<Product> {
        self.delay("related products").await;
        self.engine.related(product_id, category)
    }

    async fn fetch_deals(&self) -> Vec<Product> {
        self.delay("deals").await;
        self.engine.deals()
    }
}

/// Everything the landing page shows before a category is picked.
#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    pub categories: Vec<Category>,
    pub bestsellers: Vec<Product>,
    pub trending: Vec<Product>,
}

/// Loads the landing page sections concurrently.
pub async fn load_home_page(fetcher: &dyn CatalogFetcher) -> HomePage {
    let (categories, bestsellers, trending) = futures::join!(
        fetcher.fetch_categories(),
        fetcher.fetch_bestsellers(),
        fetcher.fetch_trending()
    );

    info!(
        "Loaded home page: {} categories, {} bestsellers, {} trending",
        categories.len(),
        bestsellers.len(),
        trending.len()
    );

    HomePage {
        categories,
        bestsellers,
        trending,
    }
}
