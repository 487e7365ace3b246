//! # simulate-behavior
//!
//! One-shot batch: loads the generated users and products, samples
//! interactions over the configured time window, writes
//! `interactions.csv`, and mirrors each event to the recommendation API.

use api_adapters::GorseClient;
use configs::Settings;
use services::simulator::BehaviorSimulator;
use storage_adapters::csv_files;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut settings = Settings::load()?;

    // 1. Load inputs
    let users = csv_files::read_users(&settings.users_file())?;
    let items = csv_files::read_products(&settings.products_file())?;
    tracing::info!(users = users.len(), items = items.len(), "loaded simulation inputs");

    // 2. Simulate
    let mut simulator = BehaviorSimulator::new(
        users,
        items,
        &settings.simulation,
        services::rng_from_seed(settings.generation.seed),
    )?;
    let interactions = simulator.run();

    // 3. Persist locally first
    csv_files::write_interactions(&settings.interactions_file(), &interactions)?;

    // 4. Mirror to the recommendation API, best-effort
    let client = GorseClient::new(
        settings.gorse.base_url.as_str(),
        settings.gorse.api_key.take(),
    );
    let report = services::mirror::mirror_feedbacks(&client, &interactions).await;
    if !report.is_clean() {
        tracing::warn!(
            sent = report.sent,
            failed = report.failures.len(),
            "some interactions were not mirrored to the recommendation API"
        );
    }

    tracing::info!(count = interactions.len(), "behavior simulation complete");
    Ok(())
}
