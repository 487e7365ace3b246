//! # seed-likes
//!
//! One-shot batch: likes random existing items on behalf of the configured
//! local user so the recommender has something to work with. Inserts are
//! idempotent; re-running adds nothing.

use api_adapters::GorseClient;
use configs::Settings;
use services::likes;
use storage_adapters::PgCatalogStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut settings = Settings::load()?;

    let store = PgCatalogStore::connect(&settings.database_url).await?;
    let client = GorseClient::new(
        settings.gorse.base_url.as_str(),
        settings.gorse.api_key.take(),
    );
    let mut rng = services::rng_from_seed(settings.generation.seed);

    let outcome = likes::seed_initial_likes(&store, &client, &settings.generation, &mut rng).await?;
    if !outcome.mirror.is_clean() {
        tracing::warn!(
            sent = outcome.mirror.sent,
            failed = outcome.mirror.failures.len(),
            "some likes were not mirrored to the recommendation API"
        );
    }

    tracing::info!(inserted = outcome.inserted, "initial likes seeded");
    Ok(())
}
