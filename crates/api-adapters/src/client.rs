//! # GorseClient
//!
//! Thin reqwest wrapper over `POST /api/user` and `POST /api/feedback`.
//! Non-2xx responses surface as errors so the caller can record them in its
//! mirror report.

use async_trait::async_trait;
use domains::{Feedback, RecommendApi, User};
use secrecy::{ExposeSecret, SecretString};

use crate::wire::{ApiFeedback, ApiUser};

const API_KEY_HEADER: &str = "X-API-Key";

pub struct GorseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
}

impl GorseClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<SecretString>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> anyhow::Result<()> {
        let mut request = self.http.post(format!("{}{path}", self.base_url)).json(body);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.expose_secret());
        }
        request.send().await?.error_for_status()?;
        Ok(())
    }
}

#[async_trait]
impl RecommendApi for GorseClient {
    async fn put_user(&self, user: &User) -> anyhow::Result<()> {
        tracing::debug!(user_id = %user.user_id, "posting user to recommendation API");
        self.post("/api/user", &ApiUser::from(user)).await
    }

    async fn put_feedback(&self, feedback: &Feedback) -> anyhow::Result<()> {
        tracing::debug!(
            user_id = %feedback.user_id,
            item_id = %feedback.item_id,
            "posting feedback to recommendation API"
        );
        self.post("/api/feedback", &ApiFeedback::from(feedback)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = GorseClient::new("http://gorse:8088/", None);
        assert_eq!(client.base_url, "http://gorse:8088");
    }
}
