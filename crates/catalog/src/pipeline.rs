//! The client-side query pipeline: filter, sort, paginate.

use tracing::warn;

use crate::product::Product;
use crate::query::{ALL_CATEGORIES, QueryState, SortOrder, ViewMode};

/// One ready-to-render page of the catalog plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    /// At most `page_size` products, in filter/sort order.
    pub items: Vec<Product>,
    /// `ceil(filtered / page_size)`; 0 when nothing matches.
    pub total_pages: usize,
    /// Distinct categories of the full snapshot, `"All"` first.
    pub categories: Vec<String>,
    /// The page actually rendered, clamped to `[1, max(1, total_pages)]`.
    pub current_page: usize,
}

/// Holds the product snapshot and the current query parameters; derives
/// the visible page on demand.
///
/// The snapshot is loaded once per session and replaced wholesale on
/// reload. Parameter changes never touch the data, only the derivation.
#[derive(Debug, Clone, Default)]
pub struct CatalogPipeline {
    products: Vec<Product>,
    state: QueryState,
    loading: bool,
    loaded: bool,
    load_error: Option<String>,
}

impl CatalogPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with a non-default page size (the UI uses
    /// [`crate::query::DEFAULT_PAGE_SIZE`]).
    pub fn with_page_size(page_size: usize) -> Self {
        let mut pipeline = Self::default();
        pipeline.state.page_size = page_size.max(1);
        pipeline
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Mark a load as in flight.
    ///
    /// Renderers should show a placeholder while this is set; it is
    /// cleared by [`Self::ingest`] or [`Self::mark_load_failed`].
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the snapshot with the validated subset of `products`.
    ///
    /// Malformed records are dropped with a data-quality warning rather
    /// than failing the whole load. Returns how many were rejected.
    pub fn ingest(&mut self, products: Vec<Product>) -> usize {
        let fetched = products.len();
        let mut accepted = Vec::with_capacity(fetched);
        for product in products {
            match product.validate() {
                Ok(()) => accepted.push(product),
                Err(e) => warn!(error = %e, "rejected malformed product record"),
            }
        }
        let rejected = fetched - accepted.len();

        self.products = accepted;
        self.loading = false;
        self.loaded = true;
        self.load_error = None;
        rejected
    }

    /// Record a failed load.
    ///
    /// The snapshot stays empty and the error is retained for
    /// observability; rendering the empty catalog remains valid.
    pub fn mark_load_failed(&mut self, message: impl Into<String>) {
        self.products.clear();
        self.loading = false;
        self.loaded = false;
        self.load_error = Some(message.into());
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.state.category = category.into();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.state.sort_order = order;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    /// Accepts any value, including pages beyond the last; out-of-range
    /// values clamp at derivation instead of erroring.
    pub fn set_page(&mut self, page: usize) {
        self.state.page = page;
    }

    /// Compute the visible page from the current snapshot and parameters.
    ///
    /// Pure projection of the pipeline state: repeated calls with no
    /// intervening setter yield identical views.
    pub fn derive(&self) -> DerivedView {
        let needle = self.state.search_text.to_lowercase();
        let mut filtered: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| {
                let title_match = p.title.to_lowercase().contains(&needle);
                let category_match =
                    self.state.category == ALL_CATEGORIES || p.category == self.state.category;
                title_match && category_match
            })
            .collect();

        // Stable sorts; equal keys keep their filter-stage order.
        match self.state.sort_order {
            SortOrder::None => {}
            SortOrder::PriceAsc => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceDesc => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOrder::NameAsc => filtered.sort_by(|a, b| collate(&a.title, &b.title)),
            SortOrder::NameDesc => filtered.sort_by(|a, b| collate(&b.title, &a.title)),
        }

        let total_pages = filtered.len().div_ceil(self.state.page_size);
        let current_page = self.state.page.clamp(1, total_pages.max(1));
        let start = (current_page - 1) * self.state.page_size;
        let items: Vec<Product> = filtered
            .into_iter()
            .skip(start)
            .take(self.state.page_size)
            .cloned()
            .collect();

        DerivedView {
            items,
            total_pages,
            categories: self.categories(),
            current_page,
        }
    }

    /// Distinct categories of the **full** snapshot in first-seen order,
    /// with the `"All"` sentinel prepended. Always derived from the
    /// unfiltered data.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if !categories.iter().any(|c| c == &product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

/// Case-folded title comparison; stands in for locale-aware collation.
fn collate(a: &str, b: &str) -> core::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
