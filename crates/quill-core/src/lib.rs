//! # Quill Core
//!
//! The domain layer of the Quillpost backend.
//! This crate contains the post model, the ports the adapters implement and the
//! create/delete pipeline. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod pipeline;
pub mod ports;

pub use error::{DomainError, RepoError};
pub use pipeline::{FALLBACK_AUTHOR, PostPipeline};
