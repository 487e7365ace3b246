//! # Product Generator
//!
//! Fabricates catalog items with random categories and attributes drawn
//! from the fixed vocabularies.

use chrono::Utc;
use configs::vocab;
use domains::Item;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::json;
use uuid::Uuid;

pub struct ProductGenerator {
    rng: StdRng,
}

impl ProductGenerator {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Generates a single item with 1-3 categories, vocabulary attributes,
    /// a price uniform in [10, 500] (rounded to cents), and an image URL
    /// keyed by the first category.
    pub fn generate_item(&mut self) -> Item {
        let num_categories = self.rng.gen_range(1..=3);
        let categories: Vec<String> = vocab::CATEGORIES
            .choose_multiple(&mut self.rng, num_categories)
            .map(|c| c.to_string())
            .collect();

        // choose() on non-empty constant slices cannot return None
        let condition = *vocab::CONDITIONS.choose(&mut self.rng).unwrap_or(&vocab::CONDITIONS[0]);
        let brand = *vocab::BRANDS.choose(&mut self.rng).unwrap_or(&vocab::BRANDS[0]);
        let size = *vocab::SIZES.choose(&mut self.rng).unwrap_or(&vocab::SIZES[0]);
        let color = *vocab::COLORS.choose(&mut self.rng).unwrap_or(&vocab::COLORS[0]);

        let price = (self.rng.gen_range(10.0..=500.0) * 100.0_f64).round() / 100.0;

        let pool = vocab::image_urls(&categories[0]);
        let image_url = pool
            .choose(&mut self.rng)
            .unwrap_or(&pool[0])
            .to_string();

        let labels = json!({
            "condition": condition,
            "brand": brand,
            "size": size,
            "color": color,
            "price": price,
            "imageUrl": image_url,
        });

        let comment = format!("{condition} {color} {brand} {} (Size {size})", categories[0]);

        Item {
            item_id: Uuid::new_v4().to_string(),
            is_hidden: false,
            categories,
            time_stamp: Utc::now(),
            labels,
            comment,
            image_url,
        }
    }

    /// Generates `count` items.
    pub fn generate_batch(&mut self, count: usize) -> Vec<Item> {
        (0..count).map(|_| self.generate_item()).collect()
    }
}
