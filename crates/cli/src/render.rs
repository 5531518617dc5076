//! Terminal rendering of a derived catalog page.

use std::fmt::Write;

use storefront_catalog::{DerivedView, Product, ViewMode};

/// Detail-view path for a product, `/product/{id}`.
///
/// Path construction is a presentation concern; the pipeline only
/// supplies the identifier.
pub fn detail_path(product: &Product) -> String {
    format!("/product/{}", product.id)
}

/// Render one derived page to a string.
pub fn render(view: &DerivedView, mode: ViewMode) -> String {
    let mut out = String::new();

    if view.items.is_empty() {
        let _ = writeln!(out, "No products match the current query.");
    } else {
        for product in &view.items {
            match mode {
                ViewMode::Card => {
                    let _ = writeln!(out, "{}", product.title);
                    let _ = writeln!(
                        out,
                        "  category: {}  price: ${:.2}",
                        product.category, product.price
                    );
                    let _ = writeln!(out, "  {}", product.short_description());
                    let _ = writeln!(out, "  {}", detail_path(product));
                    let _ = writeln!(out);
                }
                ViewMode::List => {
                    let _ = writeln!(
                        out,
                        "${:>8.2}  {:<16}  {}  {}",
                        product.price,
                        product.category,
                        product.title,
                        detail_path(product),
                    );
                }
            }
        }
    }

    if view.total_pages > 0 {
        let _ = writeln!(out, "Page {} of {}", view.current_page, view.total_pages);
    }
    let _ = writeln!(out, "Categories: {}", view.categories.join(", "));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{ALL_CATEGORIES, ProductId};

    fn sample_view() -> DerivedView {
        DerivedView {
            items: vec![Product {
                id: ProductId(7),
                title: "Mens Cotton Jacket".to_string(),
                category: "men's clothing".to_string(),
                price: 55.99,
                description: "great outerwear jackets for Spring Autumn Winter".to_string(),
                image: String::new(),
            }],
            total_pages: 2,
            categories: vec![ALL_CATEGORIES.to_string(), "men's clothing".to_string()],
            current_page: 1,
        }
    }

    #[test]
    fn card_view_renders_a_block_per_product() {
        let out = render(&sample_view(), ViewMode::Card);
        assert!(out.contains("Mens Cotton Jacket\n"));
        assert!(out.contains("category: men's clothing  price: $55.99"));
        assert!(out.contains("great outerwear jackets for Spring Autumn Winter..."));
        assert!(out.contains("/product/7"));
        assert!(out.contains("Page 1 of 2"));
    }

    #[test]
    fn list_view_renders_one_line_per_product() {
        let out = render(&sample_view(), ViewMode::List);
        let product_lines: Vec<&str> = out.lines().filter(|l| l.starts_with('$')).collect();
        assert_eq!(product_lines.len(), 1);
        assert!(product_lines[0].contains("Mens Cotton Jacket"));
        assert!(product_lines[0].contains("/product/7"));
    }

    #[test]
    fn empty_view_renders_the_empty_state() {
        let view = DerivedView {
            items: vec![],
            total_pages: 0,
            categories: vec![ALL_CATEGORIES.to_string()],
            current_page: 1,
        };
        let out = render(&view, ViewMode::Card);
        assert!(out.contains("No products match the current query."));
        assert!(!out.contains("Page "));
        assert!(out.contains("Categories: All"));
    }
}
