//! # Configuration
//!
//! Explicit, validated settings for the data-generation binaries, layered
//! over compiled-in defaults with environment overrides via the `config`
//! crate (binaries load `.env` with `dotenvy` beforehand). The category and
//! style vocabularies are compile-time constants in [`vocab`].

pub mod settings;
pub mod vocab;

pub use settings::{
    FeedbackPriors, GenerationSettings, GorseSettings, Settings, SettingsError,
    SimulationSettings,
};
