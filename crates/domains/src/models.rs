//! # Domain Models
//!
//! These structs represent the entities that flow between the generators,
//! the relational store, the CSV files, and the recommendation API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog item as stored in the `items` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// UUID v4, stored as text
    pub item_id: String,
    pub is_hidden: bool,
    /// 1-3 categories drawn from the fixed taxonomy; never empty
    pub categories: Vec<String>,
    pub time_stamp: DateTime<Utc>,
    /// JSON bucket for free-form attributes
    /// (condition, brand, size, color, price, imageUrl)
    pub labels: serde_json::Value,
    /// Human-readable description derived from the attributes
    pub comment: String,
    pub image_url: String,
}

impl Item {
    /// The item's color label, if present and a string.
    pub fn color(&self) -> Option<&str> {
        self.labels.get("color").and_then(|v| v.as_str())
    }

    /// The item's brand label, if present and a string.
    pub fn brand(&self) -> Option<&str> {
        self.labels.get("brand").and_then(|v| v.as_str())
    }

    /// The item's price label, if present and numeric.
    pub fn price(&self) -> Option<f64> {
        self.labels.get("price").and_then(|v| v.as_f64())
    }
}

/// How strongly price affects a user's interest in an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceSensitivity {
    Low,
    Medium,
    High,
}

impl PriceSensitivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSensitivity::Low => "Low",
            PriceSensitivity::Medium => "Medium",
            PriceSensitivity::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(PriceSensitivity::Low),
            "Medium" => Some(PriceSensitivity::Medium),
            "High" => Some(PriceSensitivity::High),
            _ => None,
        }
    }
}

/// Per-user style preference bag, sampled without replacement from the
/// configured vocabularies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StylePreferences {
    pub colors: Vec<String>,
    pub patterns: Vec<String>,
    pub materials: Vec<String>,
    pub brands: Vec<String>,
}

/// A synthetic user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// `U` + zero-padded index, e.g. "U000003"
    pub user_id: String,
    pub age_group: String,
    pub primary_style: String,
    pub price_sensitivity: PriceSensitivity,
    pub sustainability_focus: String,
    pub style_preferences: StylePreferences,
    /// Bias toward collaborative-filtering over image-based recommendations,
    /// in [0, 1] (Beta(2,2)-distributed)
    pub cf_preference: f64,
    /// How consistently the user follows that bias, in [0.7, 1.0]
    pub preference_consistency: f64,
}

/// The kind of a recorded user-item interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    View,
    Like,
    Purchase,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackType::View => "view",
            FeedbackType::Like => "like",
            FeedbackType::Purchase => "purchase",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "view" => Some(FeedbackType::View),
            "like" => Some(FeedbackType::Like),
            "purchase" => Some(FeedbackType::Purchase),
            _ => None,
        }
    }
}

/// A user-item interaction event. Immutable once produced; persisted to CSV
/// and/or the `feedbacks` table and mirrored to the recommendation API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub feedback_type: FeedbackType,
    pub user_id: String,
    pub item_id: String,
    pub timestamp: DateTime<Utc>,
    pub comment: String,
}
