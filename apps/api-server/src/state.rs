//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostPipeline;
use quill_core::ports::{AuthorResolver, ContentGenerator, PostRepository, UpstreamError};
use quill_infra::{GeminiClient, InMemoryPostStore, JsonFilePostStore, RandomUserClient};

use crate::config::{AppConfig, StorageBackend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: PostPipeline,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> Result<Self, UpstreamError> {
        let posts: Arc<dyn PostRepository> = match config.storage {
            StorageBackend::File => {
                tracing::info!(
                    posts_file = %config.posts_file.display(),
                    "Using JSON file post store"
                );
                Arc::new(JsonFilePostStore::new(config.posts_file.clone()))
            }
            StorageBackend::Memory => {
                tracing::warn!("POSTS_STORE=memory - posts are lost on restart");
                Arc::new(InMemoryPostStore::new())
            }
        };
        let authors: Arc<dyn AuthorResolver> = Arc::new(RandomUserClient::new(
            config.random_user_url.clone(),
            config.upstream_timeout,
        )?);
        let writer: Arc<dyn ContentGenerator> = Arc::new(GeminiClient::new(config.gemini.clone())?);

        tracing::info!("Application state initialized");

        Ok(Self::from_parts(posts, authors, writer))
    }

    /// Assemble state from already-built adapters.
    pub fn from_parts(
        posts: Arc<dyn PostRepository>,
        authors: Arc<dyn AuthorResolver>,
        writer: Arc<dyn ContentGenerator>,
    ) -> Self {
        Self {
            pipeline: PostPipeline::new(posts, authors, writer),
        }
    }
}
