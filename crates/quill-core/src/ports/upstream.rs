//! Ports for the external services a post is built from.

use async_trait::async_trait;

use crate::domain::PostDraft;

/// Inputs of a blog generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPrompt {
    pub title: String,
    pub notes: String,
    pub author: String,
}

impl BlogPrompt {
    pub fn new(draft: &PostDraft, author: &str) -> Self {
        Self {
            title: draft.title.clone(),
            notes: draft.content.clone(),
            author: author.to_string(),
        }
    }

    /// Render the single prompt text sent to the model.
    pub fn render(&self) -> String {
        format!(
            "Write a detailed blog on: {}.\nDetails: {}.\nAuthor:{}",
            self.title, self.notes, self.author
        )
    }
}

/// Source of author display names (e.g. a random identity service).
#[async_trait]
pub trait AuthorResolver: Send + Sync {
    /// Fetch one display name, formatted as `"{first} {last}"`.
    async fn resolve_author(&self) -> Result<String, UpstreamError>;
}

/// Text generation backend (e.g. an LLM API).
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate the article body for `prompt`.
    async fn generate(&self, prompt: &BlogPrompt) -> Result<String, UpstreamError>;
}

/// Errors from outbound service calls.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    Shape(String),
}
