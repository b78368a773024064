// file: src/server/state.rs
// description: Shared application state for request handlers

use crate::config::Config;
use crate::database::IndexHandle;
use crate::error::Result;
use crate::render::Renderer;
use crate::session::SessionStore;

/// Process-wide state. The index handle is shared by every session; session
/// state lives in `sessions`, keyed by cookie.
pub struct AppState {
    pub config: Config,
    pub index: IndexHandle,
    pub sessions: SessionStore,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let index = IndexHandle::new(config.database.clone());
        Self::with_index(config, index)
    }

    pub fn with_index(config: Config, index: IndexHandle) -> Result<Self> {
        let renderer = Renderer::new(config.ui.clone())?;
        let sessions = SessionStore::new(config.pagination, config.server.max_sessions);

        Ok(Self {
            config,
            index,
            sessions,
            renderer,
        })
    }
}
