//! # Domain Models and Ports
//!
//! The central entity definitions and interface contracts shared by the
//! generator binaries and their adapters.

pub mod models;
pub mod traits;
pub mod error;
pub mod report;

// Re-exporting for easier access in other crates
pub use models::*;
pub use traits::*;
pub use error::*;
pub use report::*;
