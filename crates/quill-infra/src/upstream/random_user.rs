//! randomuser.me client used to pick post authors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use quill_core::ports::{AuthorResolver, UpstreamError};

pub const DEFAULT_RANDOM_USER_URL: &str = "https://randomuser.me/api/";

#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    #[serde(default)]
    results: Vec<RandomUser>,
}

#[derive(Debug, Deserialize)]
struct RandomUser {
    name: UserName,
}

#[derive(Debug, Deserialize)]
struct UserName {
    first: String,
    last: String,
}

impl RandomUserResponse {
    fn into_display_name(self) -> Result<String, UpstreamError> {
        let user = self
            .results
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::Shape("response has no results".to_string()))?;
        Ok(format!("{} {}", user.name.first, user.name.last))
    }
}

/// Author resolver backed by a random identity service.
pub struct RandomUserClient {
    client: Client,
    url: String,
}

impl RandomUserClient {
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl AuthorResolver for RandomUserClient {
    async fn resolve_author(&self) -> Result<String, UpstreamError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: RandomUserResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Shape(e.to_string()))?;

        let name = body.into_display_name()?;
        tracing::debug!(author = %name, "Resolved author");
        Ok(name)
    }
}
