//! In-memory table view over the fetched product list.
//!
//! All searching and paging happens here, client-side, over the full list
//! the backend returned. The view tracks the search text, the current
//! page, and the rows-per-page choice; edits go through a string-backed
//! [`EditDraft`] so a half-typed price never touches a real row.

use shelf_core::types::DbId;

use crate::api::{ClientProduct, ProductPatch};

/// Offered page sizes.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Rows per page before the user picks one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Search, pagination, and selection state over the product list.
#[derive(Debug, Clone)]
pub struct TableView {
    products: Vec<ClientProduct>,
    search: String,
    page: usize,
    rows_per_page: usize,
}

impl TableView {
    pub fn new(products: Vec<ClientProduct>) -> Self {
        Self {
            products,
            search: String::new(),
            page: 0,
            rows_per_page: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn products(&self) -> &[ClientProduct] {
        &self.products
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Products whose name contains the search text, case-insensitively.
    /// An empty search matches everything.
    pub fn filtered(&self) -> Vec<&ClientProduct> {
        let needle = self.search.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The slice of the filtered list visible on the current page.
    pub fn page_rows(&self) -> Vec<&ClientProduct> {
        self.filtered()
            .into_iter()
            .skip(self.page * self.rows_per_page)
            .take(self.rows_per_page)
            .collect()
    }

    /// Number of pages the current filter spans (at least 1).
    pub fn page_count(&self) -> usize {
        let len = self.filtered().len();
        if len == 0 {
            1
        } else {
            len.div_ceil(self.rows_per_page)
        }
    }

    /// Replace the search text and jump back to the first page.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 0;
    }

    /// Switch the page size and jump back to the first page. Sizes outside
    /// [`PAGE_SIZE_OPTIONS`] are refused.
    pub fn set_rows_per_page(&mut self, size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.rows_per_page = size;
        self.page = 0;
        true
    }

    /// Jump to a page, clamped to the filtered range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Look up a product by id in the full (unfiltered) list.
    pub fn find(&self, id: DbId) -> Option<&ClientProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Drop a product locally after a successful delete; no refetch.
    pub fn remove(&mut self, id: DbId) {
        self.products.retain(|p| p.id != id);
        self.clamp_page();
    }

    /// Replace the full list after a refetch, keeping search and page size.
    pub fn replace_all(&mut self, products: Vec<ClientProduct>) {
        self.products = products;
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(self.page_count() - 1);
    }
}

// ---------------------------------------------------------------------------
// Edit drafts
// ---------------------------------------------------------------------------

/// A string-backed draft of one product's mutable fields.
///
/// The price stays text until save; parsing happens once, when the draft
/// becomes an update payload.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub name: String,
    pub price: String,
    pub category: String,
    pub in_stock: bool,
}

/// Errors turning a draft into an update payload.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("Price must be a number")]
    InvalidPrice,
}

impl EditDraft {
    pub fn from_product(product: &ClientProduct) -> Self {
        Self {
            name: product.name.clone(),
            price: format!("{:.2}", product.price),
            category: product.category.clone(),
            in_stock: product.in_stock,
        }
    }

    /// Parse the draft into an update payload carrying all four fields.
    pub fn to_patch(&self) -> Result<ProductPatch, DraftError> {
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidPrice)?;

        Ok(ProductPatch {
            name: Some(self.name.clone()),
            price: Some(price),
            category: Some(self.category.clone()),
            in_stock: Some(self.in_stock),
        })
    }
}
