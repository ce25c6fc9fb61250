use anyhow::{Context, Result};
use std::env;
use storefront::catalog::{CatalogIndex, seed};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Optional path to an external catalog seed
    let index = match env::args().nth(1) {
        Some(path) => seed::load_from_file(&path)?,
        None => seed::load_embedded().context("Failed to load embedded catalog")?,
    };

    println!("Analyzing storefront catalog...\n");
    println!("Categories in taxonomy: {}", index.category_count());
    println!("Products in catalog: {}\n", index.products().len());

    println!("=== PRODUCTS PER CATEGORY (including subcategories) ===");
    let mut covered = 0;
    for (depth, category) in index.walk_categories() {
        let direct = direct_count(&index, &category.name);
        let total = closure_count(&index, &category.name);
        covered += direct;
        println!(
            "{}{}: {} ({} direct)",
            "  ".repeat(depth),
            category.name,
            total,
            direct
        );
    }

    println!("\n=== SUMMARY ===");
    let uncategorized: Vec<_> = index
        .products()
        .iter()
        .filter(|p| index.find_category(&p.category).is_none())
        .collect();

    if uncategorized.is_empty() {
        println!("✅ Every product belongs to a taxonomy node ({} products)", covered);
    } else {
        println!(
            "⚠️  {} products reference categories outside the taxonomy:",
            uncategorized.len()
        );
        for product in uncategorized {
            println!("    Product {}: \"{}\" -> {}", product.id, product.name, product.category);
        }
    }

    let issues = index.validate();
    if !issues.is_empty() {
        println!("\n=== SEED ISSUES ===");
        for issue in issues {
            println!("  {}", issue);
        }
    }

    Ok(())
}

fn direct_count(index: &CatalogIndex, name: &str) -> usize {
    index.products().iter().filter(|p| p.category == name).count()
}

fn closure_count(index: &CatalogIndex, name: &str) -> usize {
    let names = index.resolve_category_closure(name);
    index
        .products()
        .iter()
        .filter(|p| names.contains(p.category.as_str()))
        .count()
}
