//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains post storage and the external service integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - Storage only, no outbound HTTP clients
//! - `http` - Gemini and randomuser.me clients via reqwest

pub mod storage;

#[cfg(feature = "http")]
pub mod upstream;

// Re-exports - Storage
pub use storage::{InMemoryPostStore, JsonFilePostStore};

// Re-exports - Upstream clients
#[cfg(feature = "http")]
pub use upstream::{GeminiClient, GeminiConfig, RandomUserClient};
