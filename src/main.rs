use anyhow::{Context, Result, bail};
use std::env;
use std::sync::Arc;
use storefront::catalog::{CatalogIndex, seed};
use storefront::config::StoreConfig;
use storefront::fetcher::{CatalogFetcher, SimulatedFetcher, load_home_page};
use storefront::models::Condition;
use storefront::query::{
    PageLink, ProductFilters, QueryEngine, QuerySpec, SortOrder, page_window, total_pages,
};
use tracing::{info, warn};

const CONFIG_PATH: &str = "src/configs/storefront.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = StoreConfig::load(CONFIG_PATH).context("Failed to load storefront configuration")?;
    config.validate()?;

    let index = match &config.catalog.seed_path {
        Some(path) => seed::load_from_file(path)?,
        None => seed::load_embedded().context("Failed to load embedded catalog")?,
    };
    let index: Arc<CatalogIndex> = Arc::new(index);

    let engine = Arc::new(
        QueryEngine::new(index.clone()).with_related_limit(config.catalog.related_limit),
    );
    let fetcher = SimulatedFetcher::from_config(engine.clone(), &config);

    let args: Vec<String> = env::args().skip(1).collect();
    let spec = parse_args(&args, config.catalog.page_size)?;

    if spec.category.is_none() && spec.search_term.is_none() && spec.filters.is_none() {
        let home = load_home_page(&fetcher).await;
        for product in &home.bestsellers {
            info!("Bestseller #{}: {} ({:.2})", product.id, product.name, product.price);
        }
    }

    info!(
        "Querying catalog: category={:?} search={:?} sort={:?} page={}",
        spec.category, spec.search_term, spec.sort, spec.page
    );
    let result = fetcher
        .fetch_products(&spec)
        .await
        .context("Catalog query failed")?;

    if result.has_no_matches() {
        warn!("No products matched ({} total)", result.total);
    }

    for product in &result.items {
        let discount = product
            .discount_percent()
            .map(|pct| format!(" -{}%", pct))
            .unwrap_or_default();
        info!(
            "#{:<3} {} | {} | {} | {:.2}{}{}",
            product.id,
            product.name,
            product.brand,
            product.condition,
            product.price,
            discount,
            if product.is_in_stock() { "" } else { " (out of stock)" }
        );
    }

    let page_size = usize::try_from(spec.page_size).unwrap_or(0);
    let pages = total_pages(result.total, page_size);
    let current = usize::try_from(spec.page.max(1)).unwrap_or(1);
    let links: Vec<String> = page_window(current, pages)
        .into_iter()
        .map(|link| match link {
            PageLink::Page(n) if n == current => format!("[{}]", n),
            PageLink::Page(n) => n.to_string(),
            PageLink::Gap => "...".to_string(),
        })
        .collect();
    info!(
        "Showing {} of {} products, page {}/{}: {}",
        result.items.len(),
        result.total,
        current.min(pages.max(1)),
        pages,
        links.join(" ")
    );

    let facets = engine.facets(spec.category.as_deref());
    info!(
        "Filters available: brands={:?} conditions={:?} sellers={:?}",
        facets.brands, facets.conditions, facets.sellers
    );

    Ok(())
}

fn parse_args(args: &[String], page_size: usize) -> Result<QuerySpec> {
    let mut spec = QuerySpec::new().with_page_size(
        i64::try_from(page_size).context("Configured page size is too large")?,
    );
    let mut filters = ProductFilters::default();
    let mut min_price = None;
    let mut max_price = None;

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .with_context(|| format!("Missing value for {}", flag))?;

        match flag.as_str() {
            "--category" => spec = spec.with_category(value.clone()),
            "--search" => spec = spec.with_search_term(value.clone()),
            "--brand" => filters = filters.with_brand(value.clone()),
            "--seller" => filters = filters.with_seller(value.clone()),
            "--condition" => {
                let condition: Condition = value
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid --condition: {}", e))?;
                filters = filters.with_condition(condition);
            }
            "--min-price" => {
                min_price = Some(
                    value
                        .parse::<f64>()
                        .with_context(|| format!("Invalid --min-price: {}", value))?,
                )
            }
            "--max-price" => {
                max_price = Some(
                    value
                        .parse::<f64>()
                        .with_context(|| format!("Invalid --max-price: {}", value))?,
                )
            }
            "--sort" => {
                let sort: SortOrder = value
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid --sort: {}", e))?;
                spec = spec.with_sort(sort);
            }
            "--page" => {
                spec = spec.with_page(
                    value
                        .parse()
                        .with_context(|| format!("Invalid --page: {}", value))?,
                )
            }
            other => bail!("Unknown argument: {}", other),
        }
    }

    if min_price.is_some() || max_price.is_some() {
        filters = filters.with_price_range(min_price, max_price);
    }
    if !filters.is_empty() {
        spec = spec.with_filters(filters);
    }

    Ok(spec)
}
