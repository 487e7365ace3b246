//! End-to-end simulator scenario: fixed users, fixed items, fixed seed.
//! A reference loop recomputes the documented formulas draw-by-draw and
//! must agree exactly with the simulator's output.

use chrono::Duration;
use configs::{FeedbackPriors, SimulationSettings};
use domains::{Feedback, FeedbackType, Item, PriceSensitivity, User};
use integration_tests::{fixture_item, fixture_user};
use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use services::simulator::BehaviorSimulator;

fn scenario_settings() -> SimulationSettings {
    SimulationSettings {
        start_date: "2023-01-01".parse().unwrap(),
        end_date: "2024-01-01".parse().unwrap(),
        interactions_per_user: 5,
        feedback_priors: FeedbackPriors {
            view: 0.6,
            like: 0.3,
            purchase: 0.1,
        },
    }
}

fn scenario_users() -> Vec<User> {
    vec![
        fixture_user("U000000", &["Red", "Blue"], &["Nike"], PriceSensitivity::High, 0.8, 1.0),
        fixture_user("U000001", &["Black"], &["Gucci", "Prada"], PriceSensitivity::Low, 0.2, 0.9),
        fixture_user("U000002", &["Green", "Pink"], &["Zara"], PriceSensitivity::Medium, 0.5, 0.7),
    ]
}

fn scenario_items() -> Vec<Item> {
    vec![
        fixture_item("item-0", "Red", "Nike", 80.0),
        fixture_item("item-1", "Black", "Gucci", 450.0),
        fixture_item("item-2", "Yellow", "Uniqlo", 25.0),
        fixture_item("item-3", "Green", "Zara", 210.0),
        fixture_item("item-4", "Blue", "Levi's", 120.0),
    ]
}

/// Recomputes the simulation with the documented formulas and draw order:
/// user index, item index, channel, noise, acceptance, then kind and
/// timestamp for accepted pairs.
fn reference_run(
    users: &[User],
    items: &[Item],
    settings: &SimulationSettings,
    seed: u64,
) -> Vec<Feedback> {
    let mut rng = StdRng::seed_from_u64(seed);
    let kinds = [FeedbackType::View, FeedbackType::Like, FeedbackType::Purchase];
    let priors = settings.feedback_priors;
    let prior = WeightedIndex::new([priors.view, priors.like, priors.purchase]).unwrap();
    let (start, end) = settings.window();
    let range_secs = (end - start).num_seconds();

    let mut out = Vec::new();
    for _ in 0..users.len() * settings.interactions_per_user {
        let user = &users[rng.gen_range(0..users.len())];
        let item = &items[rng.gen_range(0..items.len())];
        let channel_draw: f64 = rng.gen();
        let noise: f64 = rng.gen();
        let accept_draw: f64 = rng.gen();

        let color = item.color().unwrap();
        let brand = item.brand().unwrap();
        let price = item.price().unwrap();

        let matches = user.style_preferences.colors.iter().any(|c| c == color) as u8
            + user.style_preferences.brands.iter().any(|b| b == brand) as u8;
        let penalty = match user.price_sensitivity {
            PriceSensitivity::High if price > 100.0 => 0.5,
            PriceSensitivity::Medium if price > 200.0 => 0.7,
            PriceSensitivity::Low if price > 300.0 => 0.9,
            _ => 1.0,
        };
        let base = matches as f64 / 2.0 * penalty;

        let multiplier = if channel_draw < user.cf_preference {
            user.cf_preference
        } else {
            1.0 - user.cf_preference
        };
        let blended = multiplier * user.preference_consistency
            + noise * (1.0 - user.preference_consistency);
        let probability = (base * blended).min(1.0);

        if accept_draw > probability {
            continue;
        }

        let kind = kinds[prior.sample(&mut rng)];
        let timestamp = start + Duration::seconds(rng.gen_range(0..=range_secs));
        out.push(Feedback {
            feedback_type: kind,
            user_id: user.user_id.clone(),
            item_id: item.item_id.clone(),
            timestamp,
            comment: String::new(),
        });
    }
    out
}

#[test]
fn simulator_matches_reference_recomputation() {
    let settings = scenario_settings();
    let users = scenario_users();
    let items = scenario_items();

    let mut simulator = BehaviorSimulator::new(
        users.clone(),
        items.clone(),
        &settings,
        StdRng::seed_from_u64(42),
    )
    .unwrap();
    let actual = simulator.run();
    let expected = reference_run(&users, &items, &settings, 42);

    assert_eq!(actual, expected);

    // Per-kind distribution agrees as well.
    for kind in [FeedbackType::View, FeedbackType::Like, FeedbackType::Purchase] {
        let a = actual.iter().filter(|f| f.feedback_type == kind).count();
        let e = expected.iter().filter(|f| f.feedback_type == kind).count();
        assert_eq!(a, e, "distribution mismatch for {}", kind.as_str());
    }
}

#[test]
fn interactions_stay_inside_the_window() {
    let settings = scenario_settings();
    let (start, end) = settings.window();
    let mut simulator = BehaviorSimulator::new(
        scenario_users(),
        scenario_items(),
        &settings,
        StdRng::seed_from_u64(7),
    )
    .unwrap();

    for interaction in simulator.run() {
        assert!(interaction.timestamp >= start);
        assert!(interaction.timestamp <= end);
        assert!(!interaction.user_id.is_empty());
        assert!(!interaction.item_id.is_empty());
    }
}

#[test]
fn same_seed_reproduces_the_run() {
    let settings = scenario_settings();
    let run = |seed| {
        BehaviorSimulator::new(
            scenario_users(),
            scenario_items(),
            &settings,
            StdRng::seed_from_u64(seed),
        )
        .unwrap()
        .run()
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn empty_inputs_are_rejected() {
    let settings = scenario_settings();
    let result = BehaviorSimulator::new(
        Vec::new(),
        scenario_items(),
        &settings,
        StdRng::seed_from_u64(1),
    );
    assert!(result.is_err());
}
