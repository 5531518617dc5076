use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Product identifier as issued by the remote catalog API.
///
/// Opaque token; the numeric form only matters to presentation layers that
/// build detail-view paths from it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Words kept by [`Product::short_description`].
const SHORT_DESCRIPTION_WORDS: usize = 20;

/// A flat catalog record as returned by the product API.
///
/// Unknown wire fields (e.g. ratings) are ignored on deserialization; the
/// record carries no relationships to other entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}

impl Product {
    /// Load-time validation.
    ///
    /// Records that would make later sort comparisons meaningless (NaN or
    /// negative prices) or that cannot be rendered (blank titles) are
    /// rejected here instead of entering the snapshot.
    pub fn validate(&self) -> CatalogResult<()> {
        if !self.price.is_finite() {
            return Err(CatalogError::validation(format!(
                "product {}: price is not a finite number",
                self.id
            )));
        }
        if self.price < 0.0 {
            return Err(CatalogError::validation(format!(
                "product {}: price is negative",
                self.id
            )));
        }
        if self.title.trim().is_empty() {
            return Err(CatalogError::validation(format!(
                "product {}: title is empty",
                self.id
            )));
        }
        Ok(())
    }

    /// Short-form description: the first 20 whitespace-separated words,
    /// single-spaced, with a literal `...` suffix.
    ///
    /// The suffix is appended even when nothing was cut.
    pub fn short_description(&self) -> String {
        let words: Vec<&str> = self
            .description
            .split_whitespace()
            .take(SHORT_DESCRIPTION_WORDS)
            .collect();
        format!("{}...", words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_description(description: &str) -> Product {
        Product {
            id: ProductId(1),
            title: "Test Product".to_string(),
            category: "electronics".to_string(),
            price: 9.99,
            description: description.to_string(),
            image: "https://example.com/p/1.png".to_string(),
        }
    }

    #[test]
    fn short_description_appends_ellipsis_even_without_truncation() {
        let product = product_with_description("just a few words");
        assert_eq!(product.short_description(), "just a few words...");
    }

    #[test]
    fn short_description_keeps_exactly_twenty_words() {
        let description = (1..=25)
            .map(|n| format!("w{n}"))
            .collect::<Vec<_>>()
            .join(" ");
        let product = product_with_description(&description);

        let short = product.short_description();
        assert!(short.ends_with("..."));
        let kept: Vec<&str> = short.trim_end_matches("...").split(' ').collect();
        assert_eq!(kept.len(), 20);
        assert_eq!(kept[0], "w1");
        assert_eq!(kept[19], "w20");
    }

    #[test]
    fn short_description_normalizes_interior_whitespace() {
        let product = product_with_description("spaced   out\twords");
        assert_eq!(product.short_description(), "spaced out words...");
    }

    #[test]
    fn short_description_of_empty_description_is_just_ellipsis() {
        let product = product_with_description("");
        assert_eq!(product.short_description(), "...");
    }

    #[test]
    fn validate_accepts_zero_price() {
        let mut product = product_with_description("free sample");
        product.price = 0.0;
        assert!(product.validate().is_ok());
    }

    #[test]
    fn validate_rejects_nan_price() {
        let mut product = product_with_description("broken");
        product.price = f64::NAN;
        match product.validate().unwrap_err() {
            CatalogError::Validation(msg) => assert!(msg.contains("finite")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut product = product_with_description("broken");
        product.price = -1.0;
        assert!(matches!(
            product.validate(),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_whitespace_title() {
        let mut product = product_with_description("ok");
        product.title = "   ".to_string();
        assert!(matches!(
            product.validate(),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn deserializes_wire_record_ignoring_unknown_fields() {
        let body = r#"{
            "id": 7,
            "title": "Mens Cotton Jacket",
            "price": 55.99,
            "description": "great outerwear jackets",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/jacket.jpg",
            "rating": { "rate": 4.7, "count": 500 }
        }"#;

        let product: Product = serde_json::from_str(body).unwrap();
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.title, "Mens Cotton Jacket");
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.price, 55.99);
        assert!(product.validate().is_ok());
    }
}
