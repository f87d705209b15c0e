//! Post creation and deletion as explicit, named stages.
//!
//! Creation runs `validate` -> `resolve_author` -> `generate_content` ->
//! `persist`. The author is resolved before generation because the prompt
//! embeds it. Every stage talks to its collaborator through a port, so each
//! one can be exercised on its own.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostDraft, PostId};
use crate::error::{DomainError, RepoError};
use crate::ports::{AuthorResolver, BaseRepository, BlogPrompt, ContentGenerator, PostRepository};

/// Author name used when the identity service cannot be reached.
pub const FALLBACK_AUTHOR: &str = "Unknown Author";

/// Orchestrates post creation and deletion.
#[derive(Clone)]
pub struct PostPipeline {
    posts: Arc<dyn PostRepository>,
    authors: Arc<dyn AuthorResolver>,
    writer: Arc<dyn ContentGenerator>,
}

impl PostPipeline {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        authors: Arc<dyn AuthorResolver>,
        writer: Arc<dyn ContentGenerator>,
    ) -> Self {
        Self {
            posts,
            authors,
            writer,
        }
    }

    /// Run every creation stage and return the stored post.
    ///
    /// Nothing is persisted unless generation produced text.
    pub async fn create(
        &self,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Post, DomainError> {
        let draft = self.validate(title, content)?;
        let author = self.resolve_author().await;

        let prompt = BlogPrompt::new(&draft, &author);
        let body = self
            .generate_content(&prompt)
            .await
            .ok_or(DomainError::GenerationFailed)?;

        self.persist(NewPost::new(draft.title, body, author)).await
    }

    /// Stage 1: presence check on the caller's fields.
    pub fn validate(
        &self,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<PostDraft, DomainError> {
        PostDraft::validate(title, content)
    }

    /// Stage 2: fetch an author name, falling back to [`FALLBACK_AUTHOR`].
    pub async fn resolve_author(&self) -> String {
        match self.authors.resolve_author().await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(error = %e, "Author lookup failed, using fallback");
                FALLBACK_AUTHOR.to_string()
            }
        }
    }

    /// Stage 3: generate the article body. `None` means generation failed.
    pub async fn generate_content(&self, prompt: &BlogPrompt) -> Option<String> {
        match self.writer.generate(prompt).await {
            Ok(text) if !text.is_empty() => Some(text),
            Ok(_) => {
                tracing::error!(title = %prompt.title, "Blog generation returned empty text");
                None
            }
            Err(e) => {
                tracing::error!(title = %prompt.title, error = %e, "Blog generation failed");
                None
            }
        }
    }

    /// Stage 4: store the post; the repository assigns its id.
    pub async fn persist(&self, post: NewPost) -> Result<Post, DomainError> {
        let stored = self.posts.insert(post).await?;
        tracing::info!(post_id = %stored.id, author = %stored.author, "Post created");
        Ok(stored)
    }

    /// Delete the post with `id`.
    pub async fn remove(&self, id: PostId) -> Result<(), DomainError> {
        match self.posts.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = %id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => Err(DomainError::NotFound {
                entity_type: "Post",
                id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// All stored posts, oldest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    /// Look up a single post.
    pub async fn find(&self, id: PostId) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }
}
