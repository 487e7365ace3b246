//! # Postgres Catalog Store
//!
//! Maps the domain models onto the `items` and `feedbacks` tables with
//! parameterized SQL. Batch inserts run inside one transaction: any failure
//! rolls the whole batch back and propagates.

use async_trait::async_trait;
use domains::{CatalogStore, Feedback, Item};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    /// Connects a small pool to the given database URL.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn insert_items(&self, items: &[Item]) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;

        for item in items {
            let result = sqlx::query(
                "INSERT INTO items (item_id, is_hidden, categories, time_stamp, labels, comment, image_url) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(&item.item_id)
            .bind(item.is_hidden)
            .bind(serde_json::to_string(&item.categories)?)
            .bind(item.time_stamp)
            .bind(serde_json::to_string(&item.labels)?)
            .bind(&item.comment)
            .bind(&item.image_url)
            .execute(&mut *tx)
            .await;

            if let Err(e) = result {
                tracing::error!(item_id = %item.item_id, error = %e, "item insert failed, rolling back batch");
                tx.rollback().await?;
                return Err(e.into());
            }
        }

        tx.commit().await?;
        tracing::info!(count = items.len(), "inserted items");
        Ok(())
    }

    async fn random_item_ids(&self, n: i64) -> anyhow::Result<Vec<String>> {
        let rows = sqlx::query("SELECT item_id FROM items ORDER BY RANDOM() LIMIT $1")
            .bind(n)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("item_id").map_err(Into::into))
            .collect()
    }

    async fn insert_feedbacks(&self, feedbacks: &[Feedback]) -> anyhow::Result<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0u64;

        for feedback in feedbacks {
            let result = sqlx::query(
                "INSERT INTO feedbacks (feedback_type, user_id, item_id, timestamp) \
                 VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (feedback_type, user_id, item_id) DO NOTHING",
            )
            .bind(feedback.feedback_type.as_str())
            .bind(&feedback.user_id)
            .bind(&feedback.item_id)
            .bind(feedback.timestamp)
            .execute(&mut *tx)
            .await;

            match result {
                Ok(done) => inserted += done.rows_affected(),
                Err(e) => {
                    tracing::error!(
                        user_id = %feedback.user_id,
                        item_id = %feedback.item_id,
                        error = %e,
                        "feedback insert failed, rolling back batch"
                    );
                    tx.rollback().await?;
                    return Err(e.into());
                }
            }
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
