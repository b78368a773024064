// file: src/session/actions.rs
// description: State transitions for search, show more and re-render actions

use crate::database::IndexStatus;
use crate::search::SearchEngine;
use crate::session::state::SessionState;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// New text from the search box
    Search(String),
    /// Grow the page by one step and re-query the retained query
    ShowMore,
    /// Re-run the retained query with the current limit
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// Nothing to search for
    Idle,
    Searched,
    /// The query failed; state is unchanged
    Failed(String),
    /// Search is unavailable for the whole process
    Disabled(String),
}

impl ActionResult {
    pub fn banner(&self) -> Option<&str> {
        match self {
            ActionResult::Failed(message) | ActionResult::Disabled(message) => Some(message),
            ActionResult::Idle | ActionResult::Searched => None,
        }
    }

    /// Whether the session's current page should be displayed
    pub fn shows_results(&self, state: &SessionState) -> bool {
        match self {
            ActionResult::Searched => true,
            ActionResult::Failed(_) => state.query.is_some(),
            ActionResult::Idle | ActionResult::Disabled(_) => false,
        }
    }
}

/// Apply one user action. `state` is only modified when a search succeeds.
pub async fn apply(
    state: &mut SessionState,
    index: &IndexStatus,
    action: SessionAction,
    step: usize,
) -> ActionResult {
    let table = match index {
        IndexStatus::Ready(table) => table,
        IndexStatus::Disabled(message) => return ActionResult::Disabled(message.clone()),
    };

    let (query, limit) = match action {
        SessionAction::Search(query) => {
            if query.trim().is_empty() {
                return ActionResult::Idle;
            }
            (query.trim().to_string(), state.results_limit)
        }
        SessionAction::ShowMore => match &state.query {
            Some(query) => (query.clone(), state.next_limit(step)),
            None => return ActionResult::Idle,
        },
        SessionAction::Refresh => match &state.query {
            Some(query) => (query.clone(), state.results_limit),
            None => return ActionResult::Idle,
        },
    };

    match SearchEngine::run_search(table.as_ref(), &query, limit).await {
        Ok(outcome) => {
            state.commit(query, limit, outcome);
            ActionResult::Searched
        }
        Err(e) => {
            warn!("Search for {:?} failed: {}", query, e);
            ActionResult::Failed(e.banner())
        }
    }
}
