//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod upstream;

pub use repository::{BaseRepository, PostRepository};
pub use upstream::{AuthorResolver, BlogPrompt, ContentGenerator, UpstreamError};
