//! # generate-products
//!
//! One-shot batch: fabricates catalog items, inserts them into the `items`
//! table in a single transaction, and writes `products.csv` for the
//! simulator.

use configs::Settings;
use domains::CatalogStore;
use services::product_gen::ProductGenerator;
use storage_adapters::{csv_files, PgCatalogStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load()?;

    // 1. Generate
    let mut generator = ProductGenerator::new(services::rng_from_seed(settings.generation.seed));
    tracing::info!(count = settings.generation.num_products, "generating products");
    let items = generator.generate_batch(settings.generation.num_products);

    // 2. Persist (single transaction; any failure rolls the batch back)
    let store = PgCatalogStore::connect(&settings.database_url).await?;
    store.insert_items(&items).await?;

    // 3. Export for the behavior simulator
    csv_files::write_products(&settings.products_file(), &items)?;

    tracing::info!(count = items.len(), "product generation complete");
    Ok(())
}
