//! # MirrorReport
//!
//! Mirroring to the recommendation API is best-effort: a downstream outage
//! must never block local generation or persistence. Instead of swallowing
//! failures at the call site, adapters collect them here so the binary can
//! surface them as non-fatal warnings and still exit cleanly.

use serde::Serialize;

/// One failed mirror call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MirrorFailure {
    /// The id of the record that failed to mirror (user id or item id)
    pub record_id: String,
    pub reason: String,
}

/// Outcome of mirroring a batch of records to the recommendation API.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MirrorReport {
    /// Number of records accepted by the API
    pub sent: usize,
    /// Records the API rejected or that never reached it
    pub failures: Vec<MirrorFailure>,
}

impl MirrorReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn record_success(&mut self) {
        self.sent += 1;
    }

    pub fn record_failure(&mut self, record_id: impl Into<String>, reason: impl ToString) {
        self.failures.push(MirrorFailure {
            record_id: record_id.into(),
            reason: reason.to_string(),
        });
    }
}
