use anyhow::Context;
use clap::Parser;
use content_search_mcp::cli::{Cli, Commands, run_command};
use content_search_mcp::error::Result;
use content_search_mcp::tracing::LogFormat;
use content_search_mcp::{Catalog, Config, ContentServer};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr to avoid interfering with MCP protocol on stdout
    content_search_mcp::tracing::init_with(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    });

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(catalog) = cli.catalog {
        config.catalog = Some(catalog);
    }

    let catalog = config
        .open_catalog()
        .context("Failed to load content catalog")?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(Arc::new(catalog), config).await,
        command => {
            print!("{}", run_command(&command, &catalog, &config));
            Ok(())
        }
    }
}

async fn serve(catalog: Arc<Catalog>, config: Config) -> Result<()> {
    tracing::info!(
        "Starting content-search MCP server with {} records",
        catalog.len()
    );

    let server = ContentServer::new(catalog, config);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    // Wait for the service to complete
    service.waiting().await?;

    Ok(())
}
