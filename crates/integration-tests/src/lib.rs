//! # Test Fixtures
//!
//! Hand-built users and items with fully known attributes, for scenario
//! tests that recompute expected outcomes.

use chrono::Utc;
use domains::{Item, PriceSensitivity, StylePreferences, User};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use serde_json::json;

pub fn fixture_user(
    id: &str,
    colors: &[&str],
    brands: &[&str],
    sensitivity: PriceSensitivity,
    cf_preference: f64,
    consistency: f64,
) -> User {
    User {
        user_id: id.to_string(),
        age_group: "25-34".to_string(),
        primary_style: "Casual".to_string(),
        price_sensitivity: sensitivity,
        sustainability_focus: "Medium".to_string(),
        style_preferences: StylePreferences {
            colors: colors.iter().map(|s| s.to_string()).collect(),
            patterns: vec!["Solid".to_string()],
            materials: vec!["Cotton".to_string(), "Denim".to_string()],
            brands: brands.iter().map(|s| s.to_string()).collect(),
        },
        cf_preference,
        preference_consistency: consistency,
    }
}

pub fn fixture_item(id: &str, color: &str, brand: &str, price: f64) -> Item {
    Item {
        item_id: id.to_string(),
        is_hidden: false,
        categories: vec!["Vintage".to_string()],
        time_stamp: Utc::now(),
        labels: json!({
            "condition": "Gently Used",
            "brand": brand,
            "size": "M",
            "color": color,
            "price": price,
            "imageUrl": "https://picsum.photos/400/600?category=vintage&id=1",
        }),
        comment: Sentence(3..6).fake(),
        image_url: "https://picsum.photos/400/600?category=vintage&id=1".to_string(),
    }
}
