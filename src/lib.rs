// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod render;
pub mod search;
pub mod server;
pub mod session;
pub mod utils;

pub use config::{Config, DatabaseConfig, PaginationConfig, ServerConfig, UiConfig};
pub use database::{IndexHandle, IndexStatus, LanceDbClient, LanceToolTable, ToolTable};
pub use error::{Result, SearchError};
pub use models::ToolRecord;
pub use render::{PageModel, Renderer, ResultsModel};
pub use search::{PageView, SearchEngine, SearchOutcome};
pub use server::AppState;
pub use session::{ActionResult, SessionAction, SessionState, SessionStore};
pub use utils::{HealthCheck, HealthReport, HealthStatus, OperationTimer, Validator};
