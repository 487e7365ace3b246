//! # Core Traits (Ports)
//!
//! Any adapter must implement these traits to be used by the binaries.

use crate::models::{Feedback, Item, User};
use async_trait::async_trait;

/// Persistence contract for the relational catalog store.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Inserts all items inside a single transaction.
    /// Any failure rolls the whole batch back and propagates.
    async fn insert_items(&self, items: &[Item]) -> anyhow::Result<()>;

    /// Picks up to `n` item ids uniformly at random from the store.
    async fn random_item_ids(&self, n: i64) -> anyhow::Result<Vec<String>>;

    /// Inserts feedback rows inside a single transaction.
    ///
    /// The insert is idempotent on the natural key
    /// (feedback_type, user_id, item_id); duplicates are silently skipped.
    /// Returns the number of rows actually inserted.
    async fn insert_feedbacks(&self, feedbacks: &[Feedback]) -> anyhow::Result<u64>;
}

/// Contract for mirroring generated records to the recommendation API.
#[cfg_attr(feature = "testing", mockall::automock)]
#[async_trait]
pub trait RecommendApi: Send + Sync {
    /// POSTs one user record to the API.
    async fn put_user(&self, user: &User) -> anyhow::Result<()>;

    /// POSTs one feedback event to the API.
    async fn put_feedback(&self, feedback: &Feedback) -> anyhow::Result<()>;
}
