//! Post storage - a JSON file store and an in-memory fallback.

mod json_file;
mod memory;

pub use json_file::JsonFilePostStore;
pub use memory::InMemoryPostStore;
