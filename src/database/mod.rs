// file: src/database/mod.rs
// description: database operations module exports
// reference: internal module structure

pub mod client;
pub mod handle;
#[cfg(test)]
pub mod memory;
pub mod table;

pub use client::LanceDbClient;
pub use handle::{IndexHandle, IndexStatus};
pub use table::{LanceToolTable, ToolTable, records_from_batch};
