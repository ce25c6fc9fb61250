use std::collections::{HashSet, VecDeque};
use std::ptr;

use tracing::{info, warn};

use crate::catalog::error::SeedIssue;
use crate::models::{Category, Product};

/// Read-only view over the category taxonomy and the product collection.
///
/// Built once from seed data. Products keep their seed order, which every
/// query uses as its tie-break.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl CatalogIndex {
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let index = Self {
            categories,
            products,
        };

        let issues = index.validate();
        for issue in &issues {
            warn!("Seed data issue: {}", issue);
        }

        info!(
            "Built catalog index: {} products, {} categories ({} seed issues)",
            index.products.len(),
            index.category_count(),
            issues.len()
        );

        index
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_by_id(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// First node named `name`, searching each root depth-first in order.
    pub fn find_category(&self, name: &str) -> Option<&Category> {
        fn search<'a>(name: &str, nodes: &'a [Category]) -> Option<&'a Category> {
            for node in nodes {
                if node.name == name {
                    return Some(node);
                }
                if let Some(found) = search(name, &node.subcategories) {
                    return Some(found);
                }
            }
            None
        }

        search(name, &self.categories)
    }

    /// The category name plus every name in its subtree.
    ///
    /// A name that is not in the taxonomy resolves to itself alone, so a
    /// category filter on it degrades to an exact match.
    pub fn resolve_category_closure<'a>(&'a self, name: &'a str) -> HashSet<&'a str> {
        let mut names = HashSet::new();

        let Some(root) = self.find_category(name) else {
            names.insert(name);
            return names;
        };

        // Keyed by node address: separate subtrees may reuse a name.
        let mut visited: HashSet<*const Category> = HashSet::new();
        let mut queue = VecDeque::from([root]);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(ptr::from_ref(current)) {
                continue;
            }
            names.insert(current.name.as_str());
            queue.extend(current.subcategories.iter());
        }

        names
    }

    /// Every taxonomy node in depth-first pre-order, paired with its depth.
    pub fn walk_categories(&self) -> Vec<(usize, &Category)> {
        let mut nodes = Vec::new();
        let mut stack: Vec<(usize, &Category)> =
            self.categories.iter().rev().map(|c| (0, c)).collect();

        while let Some((depth, node)) = stack.pop() {
            nodes.push((depth, node));
            stack.extend(node.subcategories.iter().rev().map(|c| (depth + 1, c)));
        }

        nodes
    }

    pub fn category_count(&self) -> usize {
        self.walk_categories().len()
    }

    /// Report products that break the data-model invariants.
    ///
    /// Nothing is rejected: a product with an unknown category simply never
    /// matches a category filter.
    pub fn validate(&self) -> Vec<SeedIssue> {
        let known: HashSet<&str> = self
            .walk_categories()
            .into_iter()
            .map(|(_, c)| c.name.as_str())
            .collect();

        let mut issues = Vec::new();
        let mut seen_ids = HashSet::new();

        for product in &self.products {
            if !seen_ids.insert(product.id) {
                issues.push(SeedIssue::DuplicateId { id: product.id });
            }
            if !known.contains(product.category.as_str()) {
                issues.push(SeedIssue::UnknownCategory {
                    id: product.id,
                    category: product.category.clone(),
                });
            }
            if product.price < 0.0 {
                issues.push(SeedIssue::NegativePrice {
                    id: product.id,
                    price: product.price,
                });
            }
            if let Some(original) = product.original_price {
                if original < product.price {
                    issues.push(SeedIssue::OriginalBelowPrice {
                        id: product.id,
                        price: product.price,
                        original,
                    });
                }
            }
            if product.images.is_empty() {
                issues.push(SeedIssue::NoImages { id: product.id });
            }
            if !(0.0..=5.0).contains(&product.rating) {
                issues.push(SeedIssue::RatingOutOfRange {
                    id: product.id,
                    rating: product.rating,
                });
            }
        }

        issues
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Condition;

    pub(crate) fn product(id: u32, category: &str, price: f64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: String::new(),
            price,
            original_price: None,
            category: category.to_string(),
            images: vec![format!("https://picsum.photos/seed/{}/600/600", id)],
            rating: 4.5,
            review_count: 0,
            stock: 10,
            reviews: Vec::new(),
            is_bestseller: false,
            is_trending: false,
            brand: "Acme".to_string(),
            condition: Condition::New,
            seller: "Acme Store".to_string(),
        }
    }

    pub(crate) fn electronics_tree() -> Vec<Category> {
        vec![
            Category::with_children(
                "Electronics",
                vec![
                    Category::with_children("Computers", vec![Category::leaf("Laptops")]),
                    Category::leaf("Cameras"),
                ],
            ),
            Category::with_children("Books", vec![Category::leaf("Fantasy")]),
        ]
    }

    fn names<'a>(set: &HashSet<&'a str>) -> Vec<&'a str> {
        let mut names: Vec<&str> = set.iter().copied().collect();
        names.sort();
        names
    }

    #[test]
    fn test_closure_covers_subtree() {
        let index = CatalogIndex::new(electronics_tree(), Vec::new());

        assert_eq!(
            names(&index.resolve_category_closure("Electronics")),
            vec!["Cameras", "Computers", "Electronics", "Laptops"]
        );
        assert_eq!(
            names(&index.resolve_category_closure("Computers")),
            vec!["Computers", "Laptops"]
        );
        assert_eq!(names(&index.resolve_category_closure("Laptops")), vec!["Laptops"]);
    }

    #[test]
    fn test_unknown_category_resolves_to_itself() {
        let index = CatalogIndex::new(electronics_tree(), Vec::new());
        assert_eq!(names(&index.resolve_category_closure("Garden")), vec!["Garden"]);
    }

    #[test]
    fn test_reused_name_in_other_subtree() {
        let tree = vec![
            Category::with_children("Kids", vec![Category::leaf("Shoes")]),
            Category::with_children("Shoes", vec![Category::leaf("Boots")]),
        ];
        let index = CatalogIndex::new(tree, Vec::new());

        // First match wins, the same way a storefront lookup finds it.
        assert!(index.find_category("Shoes").unwrap().is_leaf());
        assert_eq!(names(&index.resolve_category_closure("Shoes")), vec!["Shoes"]);
    }

    #[test]
    fn test_walk_categories_preorder() {
        let index = CatalogIndex::new(electronics_tree(), Vec::new());
        let walked: Vec<(usize, &str)> = index
            .walk_categories()
            .into_iter()
            .map(|(depth, c)| (depth, c.name.as_str()))
            .collect();

        assert_eq!(
            walked,
            vec![
                (0, "Electronics"),
                (1, "Computers"),
                (2, "Laptops"),
                (1, "Cameras"),
                (0, "Books"),
                (1, "Fantasy"),
            ]
        );
        assert_eq!(index.category_count(), 6);
    }

    #[test]
    fn test_validate_reports_bad_products() {
        let mut discounted = product(2, "Laptops", 100.0);
        discounted.original_price = Some(80.0);
        let mut no_images = product(3, "Nowhere", 10.0);
        no_images.images.clear();
        no_images.rating = 7.0;

        let index = CatalogIndex::new(
            electronics_tree(),
            vec![product(1, "Laptops", 10.0), discounted, no_images, product(1, "Cameras", -1.0)],
        );

        let issues = index.validate();
        assert!(issues.contains(&SeedIssue::OriginalBelowPrice { id: 2, price: 100.0, original: 80.0 }));
        assert!(issues.contains(&SeedIssue::UnknownCategory { id: 3, category: "Nowhere".to_string() }));
        assert!(issues.contains(&SeedIssue::NoImages { id: 3 }));
        assert!(issues.contains(&SeedIssue::RatingOutOfRange { id: 3, rating: 7.0 }));
        assert!(issues.contains(&SeedIssue::DuplicateId { id: 1 }));
        assert!(issues.contains(&SeedIssue::NegativePrice { id: 1, price: -1.0 }));
        assert_eq!(issues.len(), 6);
    }

    #[test]
    fn test_product_lookup() {
        let index = CatalogIndex::new(electronics_tree(), vec![product(7, "Laptops", 10.0)]);
        assert_eq!(index.product_by_id(7).map(|p| p.price), Some(10.0));
        assert!(index.product_by_id(8).is_none());
    }
}
