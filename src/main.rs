// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use ai_directory_search::utils::logging::{format_error, format_info, format_success};
use ai_directory_search::{
    AppState, Config, HealthReport, IndexHandle, PageView, SearchEngine,
};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "ai_directory_search")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Paginated web search over a LanceDB tool directory", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the search page over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one search and print the first page
    Search {
        /// Search query text
        query: String,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Check that the index and table can be opened
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ai_directory_search::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Serve { host, port } => {
            cmd_serve(config, host, port).await?;
        }
        Commands::Search { query, limit } => {
            cmd_search(&config, &query, limit).await?;
        }
        Commands::Verify => {
            cmd_verify(&config).await?;
        }
    }

    Ok(())
}

async fn cmd_serve(config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    let state = AppState::new(config).context("Failed to initialize application state")?;

    ai_directory_search::server::serve(Arc::new(state), &host, port)
        .await
        .context("Server error")?;

    Ok(())
}

async fn cmd_search(config: &Config, query: &str, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(config.pagination.initial_limit);
    let index = IndexHandle::new(config.database.clone());

    let status = index.status().await;
    let Some(table) = status.table() else {
        let banner = status.banner().unwrap_or("Search disabled");
        println!("{}", format_error(banner));
        return Err(anyhow::anyhow!("Search is disabled"));
    };

    let outcome = SearchEngine::run_search(table.as_ref(), query, limit)
        .await
        .context("Search failed")?;

    if outcome.records.is_empty() {
        println!("\nNo tools found for query: \"{}\"\n", query);
        return Ok(());
    }

    println!("\nSearch Results for: \"{}\"\n", query);
    println!("{}", "=".repeat(80));

    for (idx, record) in outcome.records.iter().enumerate() {
        println!("\n{}. {}", idx + 1, record.format_summary(300));
        if let Some(url) = record.website_url(&config.ui.website_scheme) {
            println!("   {}", url);
        }
    }

    println!("\n{}", "=".repeat(80));

    let page = PageView::new(limit, outcome.total);
    println!("{}", format_info(&page.footer()));
    if page.has_more {
        println!(
            "{}",
            format_info(&format!(
                "Use --limit {} to see more",
                limit + config.pagination.step
            ))
        );
    }

    Ok(())
}

async fn cmd_verify(config: &Config) -> Result<()> {
    info!("Verifying search index");

    let index = IndexHandle::new(config.database.clone());
    let report = HealthReport::new(index.health_checks().await);

    print!("{}", report);

    if !report.is_available() {
        println!("{}", format_error("Search index unavailable"));
        return Err(anyhow::anyhow!("Index verification failed"));
    }

    println!(
        "{}",
        format_success(&format!(
            "Table '{}' ready at {}",
            config.database.table_name, config.database.uri
        ))
    );

    Ok(())
}
