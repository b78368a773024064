// file: src/database/handle.rs
// description: Process-wide memoized connection and table resolution
// reference: https://docs.rs/tokio/latest/tokio/sync/struct.OnceCell.html

use crate::config::DatabaseConfig;
use crate::database::client::LanceDbClient;
use crate::database::table::ToolTable;
use crate::utils::HealthCheck;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;
use tracing::{error, info};

const CONNECTION_CHECK: &str = "connection";
const TABLE_CHECK: &str = "table";

/// Outcome of resolving the tool table. `Disabled` carries the banner shown
/// to every session while search is unavailable.
#[derive(Clone)]
pub enum IndexStatus {
    Ready(Arc<dyn ToolTable>),
    Disabled(String),
}

impl IndexStatus {
    pub fn table(&self) -> Option<&Arc<dyn ToolTable>> {
        match self {
            IndexStatus::Ready(table) => Some(table),
            IndexStatus::Disabled(_) => None,
        }
    }

    pub fn banner(&self) -> Option<&str> {
        match self {
            IndexStatus::Ready(_) => None,
            IndexStatus::Disabled(message) => Some(message),
        }
    }
}

/// The resolved index plus the connection it came from, kept for health
/// checks. The client is absent for pre-resolved handles and when connecting
/// failed.
struct Resolved {
    client: Option<LanceDbClient>,
    status: IndexStatus,
}

/// Lazily connects and opens the configured table on first access. The
/// outcome, success or failure, is cached for the lifetime of the handle.
pub struct IndexHandle {
    config: Option<DatabaseConfig>,
    resolved: OnceCell<Resolved>,
}

impl IndexHandle {
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config: Some(config),
            resolved: OnceCell::new(),
        }
    }

    /// Handle over an already resolved table
    pub fn from_table(table: Arc<dyn ToolTable>) -> Self {
        Self::preresolved(IndexStatus::Ready(table))
    }

    pub fn disabled(message: impl Into<String>) -> Self {
        Self::preresolved(IndexStatus::Disabled(message.into()))
    }

    fn preresolved(status: IndexStatus) -> Self {
        Self {
            config: None,
            resolved: OnceCell::new_with(Some(Resolved {
                client: None,
                status,
            })),
        }
    }

    pub async fn status(&self) -> &IndexStatus {
        &self.resolve().await.status
    }

    async fn resolve(&self) -> &Resolved {
        self.resolved
            .get_or_init(|| async {
                match &self.config {
                    Some(config) => Self::establish(config).await,
                    None => Resolved {
                        client: None,
                        status: IndexStatus::Disabled(
                            "Search index is not configured".to_string(),
                        ),
                    },
                }
            })
            .await
    }

    /// One check for the store connection and one for the tool table
    pub async fn health_checks(&self) -> Vec<HealthCheck> {
        let resolved = self.resolve().await;
        vec![
            Self::check_connection(resolved).await,
            Self::check_table(resolved).await,
        ]
    }

    async fn check_connection(resolved: &Resolved) -> HealthCheck {
        let start = Instant::now();

        match (&resolved.client, &resolved.status) {
            (Some(client), _) => match client.ping().await {
                Ok(()) => HealthCheck::ok(
                    CONNECTION_CHECK,
                    Some(client.uri().to_string()),
                    start.elapsed(),
                ),
                Err(e) => HealthCheck::failed(CONNECTION_CHECK, e.banner(), start.elapsed()),
            },
            (None, IndexStatus::Ready(_)) => {
                HealthCheck::ok(CONNECTION_CHECK, None, start.elapsed())
            }
            (None, IndexStatus::Disabled(message)) => {
                HealthCheck::failed(CONNECTION_CHECK, message.clone(), start.elapsed())
            }
        }
    }

    async fn check_table(resolved: &Resolved) -> HealthCheck {
        let start = Instant::now();

        match (&resolved.status, &resolved.client) {
            (IndexStatus::Ready(table), _) => match table.count_rows().await {
                Ok(rows) => HealthCheck::ok(
                    TABLE_CHECK,
                    Some(format!("{} tools indexed", rows)),
                    start.elapsed(),
                ),
                Err(e) => HealthCheck::degraded(TABLE_CHECK, e.banner(), start.elapsed()),
            },
            (IndexStatus::Disabled(message), Some(client)) => {
                let message = match client.table_exists(client.table_name()).await {
                    Ok(false) => format!("Table '{}' does not exist", client.table_name()),
                    Ok(true) | Err(_) => message.clone(),
                };
                HealthCheck::failed(TABLE_CHECK, message, start.elapsed())
            }
            (IndexStatus::Disabled(_), None) => HealthCheck::failed(
                TABLE_CHECK,
                "Skipped: no connection to the index".to_string(),
                start.elapsed(),
            ),
        }
    }

    async fn establish(config: &DatabaseConfig) -> Resolved {
        let client = match LanceDbClient::new(config.clone()).await {
            Ok(client) => client,
            Err(e) => {
                error!("{}", e);
                return Resolved {
                    client: None,
                    status: IndexStatus::Disabled(e.banner()),
                };
            }
        };

        let status = match client.open_tool_table().await {
            Ok(table) => {
                info!("Search enabled on table {}", table.name());
                IndexStatus::Ready(Arc::new(table))
            }
            Err(e) => {
                error!("{}", e);
                IndexStatus::Disabled(e.banner())
            }
        };

        Resolved {
            client: Some(client),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryToolTable;
    use crate::utils::HealthStatus;

    #[tokio::test]
    async fn test_missing_table_disables_search_once() {
        let dir = tempfile::tempdir().unwrap();
        let handle = IndexHandle::new(DatabaseConfig {
            uri: dir.path().display().to_string(),
            table_name: "wpai_7500_tools".to_string(),
        });

        let first = handle.status().await;
        assert!(first.table().is_none());
        let banner = first.banner().unwrap().to_string();
        assert!(banner.starts_with("Error opening table"));

        // Second access returns the cached outcome
        let second = handle.status().await;
        assert_eq!(second.banner(), Some(banner.as_str()));
    }

    #[tokio::test]
    async fn test_missing_table_health_separates_connection_from_table() {
        let dir = tempfile::tempdir().unwrap();
        let handle = IndexHandle::new(DatabaseConfig {
            uri: dir.path().display().to_string(),
            table_name: "wpai_7500_tools".to_string(),
        });

        let checks = handle.health_checks().await;
        assert_eq!(checks.len(), 2);

        assert_eq!(checks[0].component, "connection");
        assert_eq!(checks[0].status, HealthStatus::Healthy);

        assert_eq!(checks[1].component, "table");
        assert_eq!(checks[1].status, HealthStatus::Unhealthy);
        assert_eq!(
            checks[1].message.as_deref(),
            Some("Table 'wpai_7500_tools' does not exist")
        );
    }

    #[tokio::test]
    async fn test_preresolved_table() {
        let handle = IndexHandle::from_table(Arc::new(MemoryToolTable::with_matches("chatbot", 3)));
        let status = handle.status().await;
        assert!(status.banner().is_none());
        assert_eq!(status.table().unwrap().count_rows().await.unwrap(), 3);

        let checks = handle.health_checks().await;
        assert_eq!(checks[0].status, HealthStatus::Healthy);
        assert_eq!(checks[1].status, HealthStatus::Healthy);
        assert_eq!(checks[1].message.as_deref(), Some("3 tools indexed"));
    }

    #[tokio::test]
    async fn test_failing_count_degrades_table_check() {
        let table = Arc::new(MemoryToolTable::with_matches("chatbot", 3));
        table.set_failing(true);
        let handle = IndexHandle::from_table(table);

        let checks = handle.health_checks().await;
        assert_eq!(checks[0].status, HealthStatus::Healthy);
        assert_eq!(checks[1].status, HealthStatus::Degraded);
    }

    #[tokio::test]
    async fn test_disabled_health() {
        let handle = IndexHandle::disabled("Database connection failed: unreachable");
        let checks = handle.health_checks().await;

        assert_eq!(checks[0].status, HealthStatus::Unhealthy);
        assert_eq!(
            checks[0].message.as_deref(),
            Some("Database connection failed: unreachable")
        );
        assert_eq!(checks[1].status, HealthStatus::Unhealthy);
    }
}
