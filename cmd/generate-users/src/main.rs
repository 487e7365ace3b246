//! # generate-users
//!
//! One-shot batch: fabricates synthetic users, writes `users.csv`, then
//! mirrors each user to the recommendation API. Mirroring is best-effort;
//! a downstream outage never affects the CSV output.

use api_adapters::GorseClient;
use configs::Settings;
use services::user_gen::{self, UserGenerator};
use storage_adapters::csv_files;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut settings = Settings::load()?;

    // 1. Generate
    let mut generator = UserGenerator::new(services::rng_from_seed(settings.generation.seed))?;
    let users = generator.generate_batch(settings.generation.num_users);
    user_gen::log_summary(&users);

    // 2. Persist locally first
    csv_files::write_users(&settings.users_file(), &users)?;

    // 3. Mirror to the recommendation API, best-effort
    let client = GorseClient::new(
        settings.gorse.base_url.as_str(),
        settings.gorse.api_key.take(),
    );
    let report = services::mirror::mirror_users(&client, &users).await;
    if !report.is_clean() {
        tracing::warn!(
            sent = report.sent,
            failed = report.failures.len(),
            "some users were not mirrored to the recommendation API"
        );
    }

    tracing::info!(count = users.len(), "user generation complete");
    Ok(())
}
