// file: src/utils/validation.rs
// description: input validation for search queries and index locations
// reference: input validation patterns

use crate::error::{Result, SearchError};

pub const MAX_QUERY_CHARS: usize = 256;

pub struct Validator;

impl Validator {
    /// Trim a user query and cap its length. Blank queries are rejected.
    pub fn validate_query(query: &str) -> Result<String> {
        let trimmed = query.trim();

        if trimmed.is_empty() {
            return Err(SearchError::Validation("Query is empty".to_string()));
        }

        Ok(trimmed.chars().take(MAX_QUERY_CHARS).collect())
    }

    pub fn validate_limit(limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(SearchError::Validation(
                "Results limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_uri(uri: &str) -> Result<()> {
        if uri.trim().is_empty() {
            return Err(SearchError::Validation("Index location is empty".to_string()));
        }

        if let Some((scheme, rest)) = uri.split_once("://") {
            if scheme.is_empty() || rest.is_empty() {
                return Err(SearchError::Validation(format!(
                    "Invalid index URI: {}",
                    uri
                )));
            }
        }

        Ok(())
    }
}
