use criterion::{Criterion, black_box, criterion_group, criterion_main};

use storefront_catalog::{CatalogPipeline, Product, ProductId, SortOrder};

fn synthetic_catalog(size: u64) -> Vec<Product> {
    (0..size)
        .map(|n| Product {
            id: ProductId(n),
            title: format!("Product {n}"),
            category: format!("category-{}", n % 7),
            price: ((n * 31) % 997) as f64 / 10.0,
            description: "a reasonably long description of the product ".repeat(4),
            image: format!("https://example.com/p/{n}.png"),
        })
        .collect()
}

fn bench_derive(c: &mut Criterion) {
    let mut pipeline = CatalogPipeline::new();
    pipeline.ingest(synthetic_catalog(1_000));
    pipeline.set_search_text("product");
    pipeline.set_sort_order(SortOrder::PriceAsc);
    pipeline.set_page(3);

    c.bench_function("derive_1000_products_sorted", |b| {
        b.iter(|| black_box(pipeline.derive()))
    });

    let mut unsorted = CatalogPipeline::new();
    unsorted.ingest(synthetic_catalog(1_000));

    c.bench_function("derive_1000_products_unsorted", |b| {
        b.iter(|| black_box(unsorted.derive()))
    });
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
