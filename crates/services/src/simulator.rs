//! # Behavior Simulator
//!
//! Samples (user, item) pairs and decides whether an interaction occurs,
//! blending a feature-overlap interest score with the user's bias toward
//! collaborative-filtering versus image-based recommendations.
//!
//! The interest formula is a shallow weighted-probability heuristic for
//! exercising bandit testing, not a validated behavioral model.

use chrono::{DateTime, Duration, Utc};
use configs::SimulationSettings;
use domains::{AppError, Feedback, FeedbackType, Item, PriceSensitivity, User};
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::Rng;

/// Interest assigned to items whose labels are unusable (missing color,
/// brand, or price).
pub const DEGRADED_INTEREST: f64 = 0.1;

/// Which recommendation surface presented the item to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Cf,
    Image,
}

/// Price-penalty multiplier for a given sensitivity. Boundaries are
/// exclusive: High sensitivity leaves a price of exactly 100 untouched.
pub fn price_penalty(sensitivity: PriceSensitivity, price: f64) -> f64 {
    match sensitivity {
        PriceSensitivity::High if price > 100.0 => 0.5,
        PriceSensitivity::Medium if price > 200.0 => 0.7,
        PriceSensitivity::Low if price > 300.0 => 0.9,
        _ => 1.0,
    }
}

/// Base interest of a user in an item: the fraction of matching features
/// (color, brand) adjusted by the price penalty. Items with missing or
/// invalid labels degrade to [`DEGRADED_INTEREST`] with a warning instead
/// of aborting the run.
pub fn interest_score(user: &User, item: &Item) -> f64 {
    let (Some(color), Some(brand), Some(price)) = (item.color(), item.brand(), item.price())
    else {
        tracing::warn!(item_id = %item.item_id, "unusable item labels, degrading interest");
        return DEGRADED_INTEREST;
    };

    let color_match = user.style_preferences.colors.iter().any(|c| c == color);
    let brand_match = user.style_preferences.brands.iter().any(|b| b == brand);
    let base = (color_match as u8 + brand_match as u8) as f64 / 2.0;

    base * price_penalty(user.price_sensitivity, price)
}

/// Final interaction probability, clamped to 1.0.
pub fn combined_probability(base_interest: f64, blended_multiplier: f64) -> f64 {
    (base_interest * blended_multiplier).min(1.0)
}

pub struct BehaviorSimulator {
    users: Vec<User>,
    items: Vec<Item>,
    window: (DateTime<Utc>, DateTime<Utc>),
    interactions_per_user: usize,
    feedback_kinds: [FeedbackType; 3],
    kind_prior: WeightedIndex<f64>,
    rng: StdRng,
}

impl BehaviorSimulator {
    pub fn new(
        users: Vec<User>,
        items: Vec<Item>,
        settings: &SimulationSettings,
        rng: StdRng,
    ) -> anyhow::Result<Self> {
        if users.is_empty() || items.is_empty() {
            return Err(AppError::ValidationError(
                "cannot simulate with an empty user or item table".to_string(),
            )
            .into());
        }
        let priors = settings.feedback_priors;
        let kind_prior = WeightedIndex::new([priors.view, priors.like, priors.purchase])?;

        Ok(Self {
            users,
            items,
            window: settings.window(),
            interactions_per_user: settings.interactions_per_user,
            feedback_kinds: [FeedbackType::View, FeedbackType::Like, FeedbackType::Purchase],
            kind_prior,
            rng,
        })
    }

    /// A random timestamp uniformly within the simulation window.
    fn random_timestamp(&mut self) -> DateTime<Utc> {
        let range = (self.window.1 - self.window.0).num_seconds();
        self.window.0 + Duration::seconds(self.rng.gen_range(0..=range))
    }

    /// Runs the simulation over `interactions_per_user × users` sampled
    /// pairs (with replacement on both sides) and returns the accepted
    /// interactions.
    ///
    /// Draw order per pair is fixed: user index, item index, channel,
    /// consistency noise, acceptance, then (for accepted pairs) feedback
    /// kind and timestamp.
    pub fn run(&mut self) -> Vec<Feedback> {
        let pair_count = self.users.len() * self.interactions_per_user;
        let mut interactions = Vec::new();

        for _ in 0..pair_count {
            let user_idx = self.rng.gen_range(0..self.users.len());
            let item_idx = self.rng.gen_range(0..self.items.len());

            let channel_draw: f64 = self.rng.gen();
            let noise: f64 = self.rng.gen();
            let accept_draw: f64 = self.rng.gen();

            let user = &self.users[user_idx];
            let item = &self.items[item_idx];

            let channel = if channel_draw < user.cf_preference {
                Channel::Cf
            } else {
                Channel::Image
            };
            let multiplier = match channel {
                Channel::Cf => user.cf_preference,
                Channel::Image => 1.0 - user.cf_preference,
            };
            let blended = multiplier * user.preference_consistency
                + noise * (1.0 - user.preference_consistency);

            let probability = combined_probability(interest_score(user, item), blended);
            if accept_draw > probability {
                continue;
            }

            let kind = self.feedback_kinds[self.kind_prior.sample(&mut self.rng)];
            let user_id = user.user_id.clone();
            let item_id = item.item_id.clone();
            let timestamp = self.random_timestamp();

            interactions.push(Feedback {
                feedback_type: kind,
                user_id,
                item_id,
                timestamp,
                comment: String::new(),
            });
        }

        tracing::info!(
            sampled_pairs = pair_count,
            accepted = interactions.len(),
            "simulation complete"
        );
        interactions
    }
}
