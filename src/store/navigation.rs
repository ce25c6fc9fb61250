use tracing::debug;

use crate::models::{Page, Product};

/// Payload carried alongside a page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageData {
    Product(Product),
    Category(String),
}

/// A back-stack snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub page: Page,
    pub data: Option<PageData>,
}

/// Page routing with an owned back-stack.
///
/// Only the product page keeps a selected product and only the category page
/// keeps a selected category; data passed with any other page is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    current: Page,
    selected_product: Option<Product>,
    selected_category: Option<String>,
    history: Vec<HistoryEntry>,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        NavigationController {
            current: Page::Home,
            selected_product: None,
            selected_category: None,
            history: Vec::new(),
        }
    }

    /// Pushes the current page and its data, then moves to `page`.
    pub fn navigate_to(&mut self, page: Page, data: Option<PageData>) {
        let snapshot = HistoryEntry {
            page: self.current,
            data: self.current_data(),
        };
        self.history.push(snapshot);
        debug!("Navigate {:?} -> {:?} (depth {})", self.current, page, self.history.len());

        self.current = page;
        match (page, data) {
            (Page::Product, Some(PageData::Product(product))) => {
                self.selected_product = Some(product);
                self.selected_category = None;
            }
            (Page::Category, Some(PageData::Category(name))) => {
                self.selected_category = Some(name);
            }
            _ => self.selected_category = None,
        }
    }

    /// Restores the previous snapshot, or the home page when history is empty.
    pub fn go_back(&mut self) {
        let Some(entry) = self.history.pop() else {
            self.current = Page::Home;
            self.selected_product = None;
            self.selected_category = None;
            return;
        };

        self.current = entry.page;
        self.selected_product = None;
        self.selected_category = None;
        match (entry.page, entry.data) {
            (Page::Product, Some(PageData::Product(product))) => {
                self.selected_product = Some(product);
            }
            (Page::Category, Some(PageData::Category(name))) => {
                self.selected_category = Some(name);
            }
            _ => {}
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn current_page(&self) -> Page {
        self.current
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    fn current_data(&self) -> Option<PageData> {
        match self.current {
            Page::Product => self.selected_product.clone().map(PageData::Product),
            Page::Category => self.selected_category.clone().map(PageData::Category),
            _ => None,
        }
    }
}
