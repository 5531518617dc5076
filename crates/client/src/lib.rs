//! `storefront-client` — the catalog's data-source seam.
//!
//! Fetches the product collection over HTTP and drives a
//! [`storefront_catalog::CatalogPipeline`] through the one-time load.

pub mod session;
pub mod source;

pub use session::CatalogSession;
pub use source::{DEFAULT_PRODUCTS_URL, HttpProductSource, ProductSource, SourceError};
