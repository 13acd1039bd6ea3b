mod cli;
mod handlers;
mod output;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use shopfeed_core::{AppConfig, PageSource};
use shopfeed_data::{JsonCatalog, MockCatalog};
use shopfeed_domain::Product;
use shopfeed_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SHOPFEED_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let config = effective_config(&cli);
    let catalog = cli.catalog.clone();

    match cli.command {
        None => {
            let source = build_source(catalog.as_deref(), &config).await?;
            let (mut app, outcome_rx) = App::new(source);
            app.run(outcome_rx).await?;
        }
        Some(Commands::Generate(args)) => {
            handlers::catalog::handle_generate(args)?;
        }
        Some(Commands::Peek(args)) => {
            // Headless inspection; no point simulating transport latency.
            let mut config = config;
            config.fetch_delay_ms = 0;
            let source = build_source(catalog.as_deref(), &config).await?;
            handlers::catalog::handle_peek(source, args).await?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "shopfeed", &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Config file values overridden by command-line flags.
fn effective_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::load();
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(items) = cli.items {
        config.catalog_size = items;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.fetch_delay_ms = delay_ms;
    }
    config
}

async fn build_source(
    catalog: Option<&Path>,
    config: &AppConfig,
) -> anyhow::Result<Arc<dyn PageSource<Product>>> {
    let delay = Duration::from_millis(config.fetch_delay_ms);
    let source: Arc<dyn PageSource<Product>> = match catalog {
        Some(path) => Arc::new(
            JsonCatalog::load(path, config.page_size)
                .await?
                .with_delay(delay),
        ),
        None => Arc::new(MockCatalog::from_config(config)),
    };
    Ok(source)
}
