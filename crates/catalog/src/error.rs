//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Domain-level catalog error.
///
/// Keep this focused on deterministic failures (validation, parameter
/// parsing). Transport concerns belong to the client crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A product record failed load-time validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A query parameter could not be parsed from its wire form.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
