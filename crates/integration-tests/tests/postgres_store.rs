//! Postgres adapter tests. These need a live database; run them with
//! `cargo test -- --ignored` and a `DATABASE_URL` pointing at a scratch
//! instance.

use chrono::Utc;
use domains::{CatalogStore, Feedback, FeedbackType};
use integration_tests::fixture_item;
use storage_adapters::PgCatalogStore;

async fn connect() -> PgCatalogStore {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must point at a scratch Postgres instance");
    PgCatalogStore::connect(&url).await.expect("connect")
}

#[tokio::test]
#[ignore = "requires a live Postgres instance"]
async fn items_round_trip_and_random_selection() {
    let store = connect().await;

    let items: Vec<_> = (0..5)
        .map(|i| {
            fixture_item(
                &uuid::Uuid::new_v4().to_string(),
                "Red",
                "Nike",
                50.0 + i as f64,
            )
        })
        .collect();
    store.insert_items(&items).await.expect("insert items");

    let ids = store.random_item_ids(3).await.expect("select ids");
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
#[ignore = "requires a live Postgres instance"]
async fn feedback_insert_is_idempotent() {
    let store = connect().await;

    let item = fixture_item(&uuid::Uuid::new_v4().to_string(), "Black", "Zara", 60.0);
    store.insert_items(std::slice::from_ref(&item)).await.expect("insert item");

    let like = Feedback {
        feedback_type: FeedbackType::Like,
        user_id: "U000001".to_string(),
        item_id: item.item_id.clone(),
        timestamp: Utc::now(),
        comment: String::new(),
    };

    let first = store.insert_feedbacks(std::slice::from_ref(&like)).await.expect("first insert");
    assert_eq!(first, 1);

    // Re-running with the same (type, user, item) triple adds nothing.
    let second = store.insert_feedbacks(std::slice::from_ref(&like)).await.expect("second insert");
    assert_eq!(second, 0);
}
