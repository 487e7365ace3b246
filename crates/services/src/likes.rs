//! # Initial-Likes Seeder
//!
//! Bootstraps the recommender for a fixed user by liking random existing
//! items. Inserts are idempotent on (type, user, item), so re-running with
//! an unchanged item set adds nothing.

use chrono::{Duration, Utc};
use configs::GenerationSettings;
use domains::{AppError, CatalogStore, Feedback, FeedbackType, MirrorReport, RecommendApi};
use rand::rngs::StdRng;
use rand::Rng;

use crate::mirror;

/// Outcome of one seeding run.
#[derive(Debug)]
pub struct SeedOutcome {
    /// Rows actually inserted (duplicates are skipped by the store)
    pub inserted: u64,
    pub mirror: MirrorReport,
}

/// Picks random items from the store and records a "like" for each, with a
/// timestamp offset 0-7 days into the past. The whole batch commits or
/// rolls back as one; mirroring to the API is best-effort afterwards.
pub async fn seed_initial_likes(
    store: &dyn CatalogStore,
    api: &dyn RecommendApi,
    settings: &GenerationSettings,
    rng: &mut StdRng,
) -> anyhow::Result<SeedOutcome> {
    let item_ids = store.random_item_ids(settings.num_initial_likes).await?;
    if item_ids.is_empty() {
        return Err(AppError::NotFound(
            "items".to_string(),
            "the store is empty; run the product generator first".to_string(),
        )
        .into());
    }

    let likes: Vec<Feedback> = item_ids
        .into_iter()
        .map(|item_id| Feedback {
            feedback_type: FeedbackType::Like,
            user_id: settings.likes_user_id.clone(),
            item_id,
            timestamp: Utc::now() - Duration::days(rng.gen_range(0..=7)),
            comment: String::new(),
        })
        .collect();

    let inserted = store.insert_feedbacks(&likes).await?;
    tracing::info!(
        user_id = %settings.likes_user_id,
        requested = likes.len(),
        inserted,
        "seeded initial likes"
    );

    let mirror = mirror::mirror_feedbacks(api, &likes).await;
    Ok(SeedOutcome { inserted, mirror })
}
