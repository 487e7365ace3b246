//! # API Mirroring
//!
//! Forwards generated records to the recommendation API, best-effort.
//! Failures are collected into a [`MirrorReport`] rather than unwinding
//! the surrounding batch; local persistence always wins.

use domains::{Feedback, MirrorReport, RecommendApi, User};

/// Mirrors a batch of users to the recommendation API.
pub async fn mirror_users(api: &dyn RecommendApi, users: &[User]) -> MirrorReport {
    let mut report = MirrorReport::default();
    for user in users {
        match api.put_user(user).await {
            Ok(()) => report.record_success(),
            Err(e) => {
                tracing::warn!(user_id = %user.user_id, error = %e, "failed to mirror user");
                report.record_failure(user.user_id.as_str(), e);
            }
        }
    }
    report
}

/// Mirrors a batch of feedback events to the recommendation API.
pub async fn mirror_feedbacks(api: &dyn RecommendApi, feedbacks: &[Feedback]) -> MirrorReport {
    let mut report = MirrorReport::default();
    for feedback in feedbacks {
        match api.put_feedback(feedback).await {
            Ok(()) => report.record_success(),
            Err(e) => {
                tracing::warn!(
                    item_id = %feedback.item_id,
                    user_id = %feedback.user_id,
                    error = %e,
                    "failed to mirror feedback"
                );
                report.record_failure(feedback.item_id.as_str(), e);
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domains::{FeedbackType, MockRecommendApi};

    fn feedback(item_id: &str) -> Feedback {
        Feedback {
            feedback_type: FeedbackType::View,
            user_id: "U000002".into(),
            item_id: item_id.into(),
            timestamp: Utc::now(),
            comment: String::new(),
        }
    }

    #[tokio::test]
    async fn failures_do_not_abort_the_batch() {
        let mut api = MockRecommendApi::new();
        api.expect_put_feedback()
            .times(3)
            .returning(|fb| {
                if fb.item_id == "bad" {
                    Err(anyhow::anyhow!("503 service unavailable"))
                } else {
                    Ok(())
                }
            });

        let batch = [feedback("a"), feedback("bad"), feedback("b")];
        let report = mirror_feedbacks(&api, &batch).await;

        assert_eq!(report.sent, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].record_id, "bad");
    }
}
