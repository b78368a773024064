// file: src/database/client.rs
// description: LanceDB client wrapper with connection management
// reference: https://docs.rs/lancedb

use crate::config::DatabaseConfig;
use crate::database::table::LanceToolTable;
use crate::error::{Result, SearchError};
use crate::utils::Validator;
use lancedb::{Connection, connect};
use tracing::{debug, info};

#[derive(Clone)]
pub struct LanceDbClient {
    connection: Connection,
    config: DatabaseConfig,
}

impl LanceDbClient {
    pub async fn new(config: DatabaseConfig) -> Result<Self> {
        Validator::validate_uri(&config.uri)
            .map_err(|e| SearchError::Connection(e.to_string()))?;

        info!("Connecting to LanceDB at {}", config.uri);

        let connection = connect(&config.uri)
            .execute()
            .await
            .map_err(|e| SearchError::Connection(e.to_string()))?;

        Ok(Self { connection, config })
    }

    pub fn uri(&self) -> &str {
        &self.config.uri
    }

    pub fn table_name(&self) -> &str {
        &self.config.table_name
    }

    /// Round trip to the store; listing tables is the cheapest call
    pub async fn ping(&self) -> Result<()> {
        debug!("Checking LanceDB connection at {}", self.config.uri);

        self.connection
            .table_names()
            .execute()
            .await
            .map(|_| ())
            .map_err(|e| SearchError::Connection(e.to_string()))
    }

    pub async fn table_exists(&self, table_name: &str) -> Result<bool> {
        let table_names = self
            .connection
            .table_names()
            .execute()
            .await
            .map_err(|e| SearchError::Connection(format!("Failed to list tables: {}", e)))?;

        Ok(table_names.iter().any(|name| name == table_name))
    }

    /// Resolve a named table. Any failure is reported as `NotFound`.
    pub async fn open_table(&self, table_name: &str) -> Result<LanceToolTable> {
        let table = self
            .connection
            .open_table(table_name)
            .execute()
            .await
            .map_err(|e| SearchError::NotFound(format!("{}: {}", table_name, e)))?;

        info!("Opened table {}", table_name);
        Ok(LanceToolTable::new(table))
    }

    /// Resolve the configured tool table
    pub async fn open_tool_table(&self) -> Result<LanceToolTable> {
        self.open_table(&self.config.table_name).await
    }
}
