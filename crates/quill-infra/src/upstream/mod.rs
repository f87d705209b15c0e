//! Outbound service clients - text generation and author lookup.

mod gemini;
mod random_user;

#[cfg(test)]
mod test_server;

pub use gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient, GeminiConfig};
pub use random_user::{DEFAULT_RANDOM_USER_URL, RandomUserClient};
