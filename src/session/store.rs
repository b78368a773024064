// file: src/session/store.rs
// description: Bounded in-memory session state keyed by session id
// reference: https://docs.rs/lru

use crate::config::PaginationConfig;
use crate::session::state::SessionState;
use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// One session's state. Requests from the same session hold this lock for
/// their whole search so concurrent actions apply one after the other.
pub type SessionHandle = Arc<tokio::sync::Mutex<SessionState>>;

/// Sessions are created only once they hold search state, and the least
/// recently used session is evicted when `capacity` is reached.
pub struct SessionStore {
    pagination: PaginationConfig,
    sessions: Mutex<LruCache<Uuid, SessionHandle>>,
}

impl SessionStore {
    pub fn new(pagination: PaginationConfig, capacity: usize) -> Self {
        Self {
            pagination,
            sessions: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
            )),
        }
    }

    /// State for a request that has no live session yet
    pub fn fresh_state(&self) -> SessionState {
        SessionState::new(self.pagination)
    }

    /// Look up a live session. Unknown, forged or evicted ids return `None`.
    pub fn get(&self, id: &Uuid) -> Option<SessionHandle> {
        self.sessions.lock().get(id).cloned()
    }

    /// Store `state` under a newly minted id
    pub fn insert(&self, state: SessionState) -> Uuid {
        let id = Uuid::new_v4();
        let evicted = self
            .sessions
            .lock()
            .push(id, Arc::new(tokio::sync::Mutex::new(state)));

        if let Some((evicted_id, _)) = evicted {
            debug!("Evicted session {}", evicted_id);
        }
        debug!("Started session {}", id);
        id
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.sessions.lock().cap().get()
    }
}
