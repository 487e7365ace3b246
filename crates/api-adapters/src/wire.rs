//! # Wire Types
//!
//! JSON bodies for the recommendation API. Field names are PascalCase per
//! its contract; the user `Comment` carries the preference bag as a JSON
//! string so downstream analysis can recover it.

use chrono::{DateTime, Utc};
use domains::{Feedback, User};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct ApiUser {
    #[serde(rename = "UserId")]
    pub user_id: String,
    #[serde(rename = "Labels")]
    pub labels: Vec<String>,
    #[serde(rename = "Comment")]
    pub comment: String,
}

impl From<&User> for ApiUser {
    fn from(user: &User) -> Self {
        let labels = vec![
            user.age_group.clone(),
            user.primary_style.clone(),
            format!("price_{}", user.price_sensitivity.as_str().to_lowercase()),
            format!("sustainability_{}", user.sustainability_focus.to_lowercase()),
        ];
        let comment = serde_json::json!({
            "style_preferences": user.style_preferences,
            "cf_preference": user.cf_preference,
            "preference_consistency": user.preference_consistency,
        })
        .to_string();

        Self {
            user_id: user.user_id.clone(),
            labels,
            comment,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ApiFeedback {
    #[serde(rename = "FeedbackType")]
    pub feedback_type: String,
    #[serde(rename = "UserId")]
    pub user_id: String,
    #[serde(rename = "ItemId")]
    pub item_id: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Comment")]
    pub comment: String,
}

impl From<&Feedback> for ApiFeedback {
    fn from(feedback: &Feedback) -> Self {
        Self {
            feedback_type: feedback.feedback_type.as_str().to_string(),
            user_id: feedback.user_id.clone(),
            item_id: feedback.item_id.clone(),
            timestamp: feedback.timestamp,
            comment: feedback.comment.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{PriceSensitivity, StylePreferences};

    #[test]
    fn user_labels_encode_demographics() {
        let user = User {
            user_id: "U000007".into(),
            age_group: "18-24".into(),
            primary_style: "Streetwear".into(),
            price_sensitivity: PriceSensitivity::High,
            sustainability_focus: "Medium".into(),
            style_preferences: StylePreferences::default(),
            cf_preference: 0.61,
            preference_consistency: 0.75,
        };
        let body = ApiUser::from(&user);
        assert_eq!(
            body.labels,
            vec!["18-24", "Streetwear", "price_high", "sustainability_medium"]
        );

        let comment: serde_json::Value = serde_json::from_str(&body.comment).unwrap();
        assert_eq!(comment["cf_preference"], 0.61);
        assert_eq!(comment["preference_consistency"], 0.75);
    }

    #[test]
    fn wire_bodies_are_pascal_case() {
        let user = User {
            user_id: "U000001".into(),
            age_group: "55+".into(),
            primary_style: "Formal".into(),
            price_sensitivity: PriceSensitivity::Low,
            sustainability_focus: "Low".into(),
            style_preferences: StylePreferences::default(),
            cf_preference: 0.5,
            preference_consistency: 0.9,
        };
        let value = serde_json::to_value(ApiUser::from(&user)).unwrap();
        assert!(value.get("UserId").is_some());
        assert!(value.get("Labels").is_some());
        assert!(value.get("Comment").is_some());
        assert!(value.get("user_id").is_none());
    }
}
