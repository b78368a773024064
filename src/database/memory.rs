// file: src/database/memory.rs
// description: In-memory tool table used by unit tests

use crate::database::table::ToolTable;
use crate::error::{Result, SearchError};
use crate::models::ToolRecord;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Case-insensitive substring match over title, content and features, in
/// insertion order.
pub struct MemoryToolTable {
    records: Vec<ToolRecord>,
    failing: AtomicBool,
    searches: AtomicUsize,
}

impl MemoryToolTable {
    pub fn new(records: Vec<ToolRecord>) -> Self {
        Self {
            records,
            failing: AtomicBool::new(false),
            searches: AtomicUsize::new(0),
        }
    }

    /// `n` tools whose content mentions `keyword`
    pub fn with_matches(keyword: &str, n: usize) -> Self {
        let records = (0..n)
            .map(|i| {
                ToolRecord::new(
                    format!("Tool {}", i),
                    format!("A {} tool", keyword),
                    "ai, productivity",
                    format!("tool{}.example.com", i),
                )
            })
            .collect();
        Self::new(records)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ToolTable for MemoryToolTable {
    async fn search(&self, query: &str, limit: Option<usize>) -> Result<Vec<ToolRecord>> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        // Give concurrent requests a chance to interleave, as a real store would
        tokio::task::yield_now().await;

        if self.failing.load(Ordering::SeqCst) {
            return Err(SearchError::Query("index read fault".to_string()));
        }

        let needle = query.to_lowercase();
        let matches = self.records.iter().filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record.content.to_lowercase().contains(&needle)
                || record.features.to_lowercase().contains(&needle)
        });

        Ok(matches.take(limit.unwrap_or(usize::MAX)).cloned().collect())
    }

    async fn count_rows(&self) -> Result<usize> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SearchError::Query("index read fault".to_string()));
        }
        Ok(self.records.len())
    }
}
