// file: src/database/table.rs
// description: Tool table abstraction and LanceDB full-text search backend
// reference: https://docs.rs/lancedb

use crate::error::{Result, SearchError};
use crate::models::ToolRecord;
use arrow::compute::cast;
use arrow_array::{Array, RecordBatch, StringArray};
use arrow_schema::DataType;
use async_trait::async_trait;
use futures::StreamExt;
use lancedb::Table;
use lancedb::index::scalar::FullTextSearchQuery;
use lancedb::query::{ExecutableQuery, QueryBase};
use tracing::{debug, warn};

pub const TITLE_COLUMN: &str = "Title";
pub const CONTENT_COLUMN: &str = "content";
pub const FEATURES_COLUMN: &str = "Features";
pub const WEBSITE_COLUMN: &str = "Website";

/// Read-only view of one named collection in the external index.
///
/// `search` returns records in the engine's relevance order. A `limit` of
/// `None` asks for every match.
#[async_trait]
pub trait ToolTable: Send + Sync {
    async fn search(&self, query: &str, limit: Option<usize>) -> Result<Vec<ToolRecord>>;

    async fn count_rows(&self) -> Result<usize>;
}

pub struct LanceToolTable {
    table: Table,
}

impl LanceToolTable {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    pub fn name(&self) -> &str {
        self.table.name()
    }
}

#[async_trait]
impl ToolTable for LanceToolTable {
    async fn search(&self, query: &str, limit: Option<usize>) -> Result<Vec<ToolRecord>> {
        // Full text queries default to a small page; bound by the row count instead
        let limit = match limit {
            Some(limit) => limit,
            None => self.count_rows().await?.max(1),
        };

        debug!("Full text search for {:?} with limit {}", query, limit);

        let mut results_stream = self
            .table
            .query()
            .full_text_search(FullTextSearchQuery::new(query.to_string()))
            .limit(limit)
            .execute()
            .await
            .map_err(|e| SearchError::Query(e.to_string()))?;

        let mut records = Vec::new();

        while let Some(batch_result) = results_stream.next().await {
            let batch = batch_result
                .map_err(|e| SearchError::Query(format!("Failed to read result batch: {}", e)))?;
            records.extend(records_from_batch(&batch)?);
        }

        Ok(records)
    }

    async fn count_rows(&self) -> Result<usize> {
        self.table
            .count_rows(None)
            .await
            .map_err(|e| SearchError::Query(format!("Failed to count rows: {}", e)))
    }
}

/// Decode one Arrow batch into records. Missing columns and null cells become
/// empty strings.
pub fn records_from_batch(batch: &RecordBatch) -> Result<Vec<ToolRecord>> {
    let titles = string_column(batch, TITLE_COLUMN)?;
    let contents = string_column(batch, CONTENT_COLUMN)?;
    let features = string_column(batch, FEATURES_COLUMN)?;
    let websites = string_column(batch, WEBSITE_COLUMN)?;

    let records = (0..batch.num_rows())
        .map(|i| ToolRecord {
            title: cell(titles.as_ref(), i),
            content: cell(contents.as_ref(), i),
            features: cell(features.as_ref(), i),
            website: cell(websites.as_ref(), i),
        })
        .collect();

    Ok(records)
}

fn string_column(batch: &RecordBatch, name: &str) -> Result<Option<StringArray>> {
    let Some(column) = batch.column_by_name(name) else {
        warn!("Result batch has no '{}' column", name);
        return Ok(None);
    };

    let utf8 = cast(column, &DataType::Utf8)
        .map_err(|e| SearchError::Query(format!("Invalid '{}' column type: {}", name, e)))?;

    let strings = utf8
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| SearchError::Query(format!("Invalid '{}' column type", name)))?
        .clone();

    Ok(Some(strings))
}

fn cell(column: Option<&StringArray>, row: usize) -> String {
    match column {
        Some(values) if !values.is_null(row) => values.value(row).to_string(),
        _ => String::new(),
    }
}
