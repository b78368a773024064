// file: src/search/pagination.rs
// description: Derived pagination view for the results footer and show more control

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Records actually on screen
    pub shown: usize,
    pub total: usize,
    /// Whether the "show more" control is offered
    pub has_more: bool,
}

impl PageView {
    pub fn new(results_limit: usize, total_results: usize) -> Self {
        Self {
            shown: results_limit.min(total_results),
            total: total_results,
            has_more: total_results > results_limit,
        }
    }

    pub fn footer(&self) -> String {
        format!("Showing {} of {} results", self.shown, self.total)
    }
}
