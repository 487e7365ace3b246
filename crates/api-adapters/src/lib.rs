//! # Recommendation API Adapter
//!
//! HTTP client for a Gorse-style recommendation service. Callers treat it
//! as fire-and-forget: every method returns a plain `Result` and the
//! services layer decides that failures are non-fatal.

pub mod client;
pub mod wire;

pub use client::GorseClient;
