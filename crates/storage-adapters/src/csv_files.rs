//! # CSV Files
//!
//! Tabular outputs with a header row per file. Nested structures
//! (categories, labels, style preferences) are stored as JSON text inside
//! their cells, matching the relational columns. Malformed JSON cells
//! degrade to empty values with a warning when read back.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use domains::{Feedback, Item, PriceSensitivity, StylePreferences, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct ProductRow {
    item_id: String,
    is_hidden: bool,
    categories: String,
    time_stamp: DateTime<Utc>,
    labels: String,
    comment: String,
    image_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct UserRow {
    user_id: String,
    age_group: String,
    primary_style: String,
    price_sensitivity: String,
    sustainability_focus: String,
    style_preferences: String,
    cf_preference: f64,
    preference_consistency: f64,
}

/// Interaction rows keep the recommendation API's field names so the file
/// can be replayed against it directly.
#[derive(Debug, Serialize)]
struct InteractionRow {
    #[serde(rename = "FeedbackType")]
    feedback_type: String,
    #[serde(rename = "UserId")]
    user_id: String,
    #[serde(rename = "ItemId")]
    item_id: String,
    #[serde(rename = "Timestamp")]
    timestamp: DateTime<Utc>,
    #[serde(rename = "Comment")]
    comment: String,
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    Ok(())
}

pub fn write_products(path: &Path, items: &[Item]) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    for item in items {
        writer.serialize(ProductRow {
            item_id: item.item_id.clone(),
            is_hidden: item.is_hidden,
            categories: serde_json::Value::from(item.categories.clone()).to_string(),
            time_stamp: item.time_stamp,
            labels: item.labels.to_string(),
            comment: item.comment.clone(),
            image_url: item.image_url.clone(),
        })?;
    }
    writer.flush()?;
    tracing::info!(count = items.len(), path = %path.display(), "wrote products CSV");
    Ok(())
}

pub fn read_products(path: &Path) -> anyhow::Result<Vec<Item>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let mut items = Vec::new();
    for row in reader.deserialize::<ProductRow>() {
        let row = row?;
        let categories = serde_json::from_str(&row.categories).unwrap_or_else(|e| {
            tracing::warn!(item_id = %row.item_id, error = %e, "malformed categories, defaulting to empty");
            Vec::new()
        });
        let labels = serde_json::from_str(&row.labels).unwrap_or_else(|e| {
            tracing::warn!(item_id = %row.item_id, error = %e, "malformed labels, defaulting to empty");
            serde_json::Value::Object(serde_json::Map::new())
        });
        items.push(Item {
            item_id: row.item_id,
            is_hidden: row.is_hidden,
            categories,
            time_stamp: row.time_stamp,
            labels,
            comment: row.comment,
            image_url: row.image_url,
        });
    }
    Ok(items)
}

pub fn write_users(path: &Path, users: &[User]) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    for user in users {
        writer.serialize(UserRow {
            user_id: user.user_id.clone(),
            age_group: user.age_group.clone(),
            primary_style: user.primary_style.clone(),
            price_sensitivity: user.price_sensitivity.as_str().to_string(),
            sustainability_focus: user.sustainability_focus.clone(),
            style_preferences: serde_json::to_string(&user.style_preferences)?,
            cf_preference: user.cf_preference,
            preference_consistency: user.preference_consistency,
        })?;
    }
    writer.flush()?;
    tracing::info!(count = users.len(), path = %path.display(), "wrote users CSV");
    Ok(())
}

pub fn read_users(path: &Path) -> anyhow::Result<Vec<User>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let mut users = Vec::new();
    for row in reader.deserialize::<UserRow>() {
        let row = row?;
        let price_sensitivity = PriceSensitivity::from_str(&row.price_sensitivity)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unknown price sensitivity {:?} for user {}",
                    row.price_sensitivity,
                    row.user_id
                )
            })?;
        let style_preferences =
            serde_json::from_str(&row.style_preferences).unwrap_or_else(|e| {
                tracing::warn!(user_id = %row.user_id, error = %e, "malformed style preferences, defaulting to empty");
                StylePreferences::default()
            });
        users.push(User {
            user_id: row.user_id,
            age_group: row.age_group,
            primary_style: row.primary_style,
            price_sensitivity,
            sustainability_focus: row.sustainability_focus,
            style_preferences,
            cf_preference: row.cf_preference,
            preference_consistency: row.preference_consistency,
        });
    }
    Ok(users)
}

pub fn write_interactions(path: &Path, feedbacks: &[Feedback]) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    for feedback in feedbacks {
        writer.serialize(InteractionRow {
            feedback_type: feedback.feedback_type.as_str().to_string(),
            user_id: feedback.user_id.clone(),
            item_id: feedback.item_id.clone(),
            timestamp: feedback.timestamp,
            comment: feedback.comment.clone(),
        })?;
    }
    writer.flush()?;
    tracing::info!(count = feedbacks.len(), path = %path.display(), "wrote interactions CSV");
    Ok(())
}
