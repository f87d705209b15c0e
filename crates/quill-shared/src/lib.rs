//! # Quill Shared
//!
//! Wire types shared by the API server and its clients.

pub mod dto;
pub mod response;

pub use dto::{CreatePostRequest, MessageResponse};
pub use response::ErrorResponse;
