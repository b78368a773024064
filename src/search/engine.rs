// file: src/search/engine.rs
// description: Query execution against the tool table with a bounded page
// reference: https://docs.rs/lancedb

use crate::database::ToolTable;
use crate::error::Result;
use crate::models::ToolRecord;
use crate::utils::{OperationTimer, Validator};
use std::time::Duration;
use tracing::info;

const SLOW_SEARCH: Duration = Duration::from_secs(2);

/// Records for the current page plus the count of every match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub records: Vec<ToolRecord>,
    pub total: usize,
}

pub struct SearchEngine;

impl SearchEngine {
    /// Run `query` twice: once unbounded to count matches, once bounded to
    /// `limit` for the records to show. Relevance order is the table's own.
    pub async fn run_search(
        table: &dyn ToolTable,
        query: &str,
        limit: usize,
    ) -> Result<SearchOutcome> {
        let query = Validator::validate_query(query)?;
        Validator::validate_limit(limit)?;

        let timer = OperationTimer::start(query.as_str());

        let total = table.search(&query, None).await?.len();
        let records = table.search(&query, Some(limit)).await?;

        timer.finish(records.len(), SLOW_SEARCH);

        info!(
            "Search {:?}: showing {} of {} results",
            query,
            records.len(),
            total
        );

        Ok(SearchOutcome { records, total })
    }
}
