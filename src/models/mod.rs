// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod tool;

pub use tool::ToolRecord;
