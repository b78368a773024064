// file: src/session/state.rs
// description: Per-session query and pagination state

use crate::config::PaginationConfig;
use crate::models::ToolRecord;
use crate::search::{PageView, SearchOutcome};

/// State for one user session.
///
/// `results_limit` never decreases. `total_results` and `records` are
/// replaced by every successful search and left alone when a search fails,
/// so the previous page stays on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub query: Option<String>,
    pub results_limit: usize,
    pub total_results: usize,
    pub records: Vec<ToolRecord>,
}

impl SessionState {
    pub fn new(pagination: PaginationConfig) -> Self {
        Self {
            query: None,
            results_limit: pagination.initial_limit,
            total_results: 0,
            records: Vec::new(),
        }
    }

    /// Limit a "show more" action would search with
    pub fn next_limit(&self, step: usize) -> usize {
        self.results_limit.saturating_add(step)
    }

    pub fn commit(&mut self, query: String, limit: usize, outcome: SearchOutcome) {
        self.query = Some(query);
        self.results_limit = self.results_limit.max(limit);
        self.total_results = outcome.total;
        self.records = outcome.records;
    }

    pub fn page_view(&self) -> PageView {
        PageView::new(self.results_limit, self.total_results)
    }
}
