//! Catalog session: one pipeline, one source, one load.

use tracing::{error, info};

use storefront_catalog::{CatalogPipeline, DerivedView, SortOrder, ViewMode};

use crate::source::{ProductSource, SourceError};

/// Owns the query pipeline together with its data source.
///
/// The collection is fetched when [`CatalogSession::load`] is called and
/// never re-fetched on parameter changes; calling `load` again replaces
/// the snapshot wholesale. Presentation layers talk to the session only.
pub struct CatalogSession<S> {
    source: S,
    pipeline: CatalogPipeline,
}

impl<S: ProductSource> CatalogSession<S> {
    pub fn new(source: S) -> Self {
        Self::with_pipeline(source, CatalogPipeline::new())
    }

    /// Session over a pre-configured pipeline (e.g. custom page size).
    pub fn with_pipeline(source: S, pipeline: CatalogPipeline) -> Self {
        Self { source, pipeline }
    }

    /// Fetch the collection and ingest it into the pipeline.
    ///
    /// A failed fetch is non-fatal: the error is logged and recorded on
    /// the pipeline, the snapshot stays empty, and the session keeps
    /// serving (empty) derivations. The error is still returned so the
    /// caller can surface it.
    pub async fn load(&mut self) -> Result<(), SourceError> {
        self.pipeline.begin_load();
        match self.source.fetch_products().await {
            Ok(products) => {
                let fetched = products.len();
                let rejected = self.pipeline.ingest(products);
                info!(fetched, rejected, "catalog loaded");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "catalog load failed");
                self.pipeline.mark_load_failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn pipeline(&self) -> &CatalogPipeline {
        &self.pipeline
    }

    pub fn derive(&self) -> DerivedView {
        self.pipeline.derive()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.pipeline.set_search_text(text);
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.pipeline.set_category(category);
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.pipeline.set_sort_order(order);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.pipeline.set_view_mode(mode);
    }

    pub fn set_page(&mut self, page: usize) {
        self.pipeline.set_page(page);
    }
}
