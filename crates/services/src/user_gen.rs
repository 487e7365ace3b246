//! # User Generator
//!
//! Fabricates synthetic users with style preferences and a CF-vs-image
//! recommendation bias, used downstream to exercise bandit-style testing
//! of the recommender.

use std::collections::BTreeMap;

use configs::vocab;
use domains::{PriceSensitivity, StylePreferences, User};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Beta, Distribution};

pub struct UserGenerator {
    rng: StdRng,
    /// Beta(2,2): bell-shaped over [0,1], mass centered at 0.5
    cf_distribution: Beta<f64>,
}

impl UserGenerator {
    pub fn new(rng: StdRng) -> anyhow::Result<Self> {
        let cf_distribution = Beta::new(2.0, 2.0)?;
        Ok(Self { rng, cf_distribution })
    }

    fn sample_subset(&mut self, pool: &[&str], min: usize, max: usize) -> Vec<String> {
        let k = self.rng.gen_range(min..=max);
        pool.choose_multiple(&mut self.rng, k)
            .map(|s| s.to_string())
            .collect()
    }

    fn style_preferences(&mut self) -> StylePreferences {
        StylePreferences {
            colors: self.sample_subset(&vocab::COLORS, 2, 5),
            patterns: self.sample_subset(&vocab::PATTERNS, 1, 3),
            materials: self.sample_subset(&vocab::MATERIALS, 2, 4),
            brands: self.sample_subset(&vocab::BRANDS, 2, 4),
        }
    }

    /// Generates the user for a given index (`U` + zero-padded index).
    pub fn generate_user(&mut self, idx: usize) -> User {
        let price_sensitivity = match self.rng.gen_range(0..3) {
            0 => PriceSensitivity::Low,
            1 => PriceSensitivity::Medium,
            _ => PriceSensitivity::High,
        };

        let age_group = *vocab::AGE_GROUPS
            .choose(&mut self.rng)
            .unwrap_or(&vocab::AGE_GROUPS[0]);
        let primary_style = *vocab::PRIMARY_STYLES
            .choose(&mut self.rng)
            .unwrap_or(&vocab::PRIMARY_STYLES[0]);
        let sustainability_focus = *vocab::SUSTAINABILITY_LEVELS
            .choose(&mut self.rng)
            .unwrap_or(&vocab::SUSTAINABILITY_LEVELS[0]);

        let style_preferences = self.style_preferences();
        let cf_preference = self.cf_distribution.sample(&mut self.rng);
        let preference_consistency = self.rng.gen_range(0.7..=1.0);

        User {
            user_id: format!("U{idx:06}"),
            age_group: age_group.to_string(),
            primary_style: primary_style.to_string(),
            price_sensitivity,
            sustainability_focus: sustainability_focus.to_string(),
            style_preferences,
            cf_preference,
            preference_consistency,
        }
    }

    /// Generates users for indexes `0..count`.
    pub fn generate_batch(&mut self, count: usize) -> Vec<User> {
        (0..count).map(|idx| self.generate_user(idx)).collect()
    }
}

/// Logs a per-attribute distribution summary of a generated batch.
pub fn log_summary(users: &[User]) {
    let mut age_groups: BTreeMap<&str, usize> = BTreeMap::new();
    let mut styles: BTreeMap<&str, usize> = BTreeMap::new();
    for user in users {
        *age_groups.entry(user.age_group.as_str()).or_default() += 1;
        *styles.entry(user.primary_style.as_str()).or_default() += 1;
    }
    let mean_cf = users.iter().map(|u| u.cf_preference).sum::<f64>() / users.len().max(1) as f64;

    tracing::info!(total = users.len(), mean_cf_preference = mean_cf, "generated users");
    tracing::info!(?age_groups, "age group distribution");
    tracing::info!(?styles, "primary style distribution");
}
