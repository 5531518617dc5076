//! Query parameters: search, category filter, sort order, view mode, page.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Products rendered per page unless overridden at construction.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort criteria for the derived view.
///
/// Wire names (`price-asc`, `name-desc`, ...) match the sort selector of
/// the catalog UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Preserve the order products arrived in.
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "" => Ok(SortOrder::None),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "name-asc" => Ok(SortOrder::NameAsc),
            "name-desc" => Ok(SortOrder::NameDesc),
            other => Err(CatalogError::invalid_parameter(format!(
                "unknown sort order: {other}"
            ))),
        }
    }
}

/// Layout toggle. Affects presentation only, never the derived data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Card,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Card => "card",
            ViewMode::List => "list",
        }
    }
}

impl FromStr for ViewMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(ViewMode::Card),
            "list" => Ok(ViewMode::List),
            other => Err(CatalogError::invalid_parameter(format!(
                "unknown view mode: {other}"
            ))),
        }
    }
}

/// Current query parameters, owned by the pipeline and mutated only
/// through its setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub category: String,
    pub sort_order: SortOrder,
    pub view_mode: ViewMode,
    /// 1-based; values beyond the last page clamp at derivation.
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort_order: SortOrder::None,
            view_mode: ViewMode::Card,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
