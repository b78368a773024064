// file: src/session/mod.rs
// description: session state module exports
// reference: internal module structure

pub mod actions;
pub mod state;
pub mod store;

pub use actions::{ActionResult, SessionAction, apply};
pub use state::SessionState;
pub use store::{SessionHandle, SessionStore};
