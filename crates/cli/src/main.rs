use storefront_catalog::CatalogPipeline;
use storefront_cli::args::{API_URL_ENV, Args, USAGE};
use storefront_cli::render;
use storefront_client::{CatalogSession, DEFAULT_PRODUCTS_URL, HttpProductSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let args = Args::parse()?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let url = args
        .url
        .clone()
        .or_else(|| std::env::var(API_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_PRODUCTS_URL.to_string());

    let pipeline = match args.page_size {
        Some(n) => CatalogPipeline::with_page_size(n),
        None => CatalogPipeline::new(),
    };
    let mut session = CatalogSession::with_pipeline(HttpProductSource::new(url), pipeline);

    // A failed load still renders: the empty catalog is a valid state.
    if session.load().await.is_err() {
        tracing::warn!("rendering empty catalog after failed load");
    }

    if let Some(search) = args.search {
        session.set_search_text(search);
    }
    if let Some(category) = args.category {
        session.set_category(category);
    }
    if let Some(sort) = args.sort {
        session.set_sort_order(sort);
    }
    if let Some(view) = args.view {
        session.set_view_mode(view);
    }
    if let Some(page) = args.page {
        session.set_page(page);
    }

    let mode = session.pipeline().state().view_mode;
    let view = session.derive();
    print!("{}", render::render(&view, mode));

    Ok(())
}
