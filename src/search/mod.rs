// file: src/search/mod.rs
// description: query and pagination module exports
// reference: internal module structure

pub mod engine;
pub mod pagination;

pub use engine::{SearchEngine, SearchOutcome};
pub use pagination::PageView;
